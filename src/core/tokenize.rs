/// 把 pkg-config 印出的一行旗標切成個別旗標
///
/// 以空白切分，反斜線跳脫下一個字元 (pkg-config 用 `\ ` 表示路徑中的空白)。
pub fn split_flags(output: &str) -> Vec<String> {
    let mut flags = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut chars = output.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                in_token = true;
                match chars.next() {
                    Some(escaped) => current.push(escaped),
                    // 結尾落單的反斜線照原樣保留
                    None => current.push('\\'),
                }
            }
            c if c.is_ascii_whitespace() => {
                if in_token {
                    flags.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            c => {
                in_token = true;
                current.push(c);
            }
        }
    }

    if in_token {
        flags.push(current);
    }

    flags
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_typical_output() {
        let output = "-I/usr/include/glib-2.0 -I/usr/lib/glib-2.0/include -lglib-2.0 \n";
        assert_eq!(
            split_flags(output),
            vec![
                "-I/usr/include/glib-2.0",
                "-I/usr/lib/glib-2.0/include",
                "-lglib-2.0"
            ]
        );
    }

    #[test]
    fn test_collapses_whitespace_runs() {
        assert_eq!(split_flags("  -lfoo\t\t-lbar\n\n"), vec!["-lfoo", "-lbar"]);
    }

    #[test]
    fn test_escaped_space_stays_in_flag() {
        assert_eq!(
            split_flags(r"-I/opt/my\ dir/include -lfoo"),
            vec!["-I/opt/my dir/include", "-lfoo"]
        );
    }

    #[test]
    fn test_escaped_backslash() {
        assert_eq!(split_flags(r"-IC:\\sdk"), vec![r"-IC:\sdk"]);
    }

    #[test]
    fn test_trailing_backslash_is_kept() {
        assert_eq!(split_flags("-Ifoo\\"), vec!["-Ifoo\\"]);
    }

    #[test]
    fn test_escaped_space_alone_is_a_token() {
        assert_eq!(split_flags(r"\ "), vec![" "]);
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert!(split_flags("").is_empty());
        assert!(split_flags(" \n\t").is_empty());
    }
}

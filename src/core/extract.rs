/// 從 pkg-config 的旗標清單中取出帶有 `-<prefix>` 的項目，並去掉前綴
///
/// 比對是單純的字串前綴比對 (區分大小寫)：`-Ifoo` 配 `I` 得到 `foo`，
/// 只有 `-I` 時得到空字串，`-ifoo` 不符合 `I`。沒有符合的項目就回傳空清單。
pub fn extract_pkg_config_items<S: AsRef<str>>(items: &[S], prefix: &str) -> Vec<String> {
    let full_prefix = format!("-{}", prefix);

    items
        .iter()
        .filter_map(|item| item.as_ref().strip_prefix(full_prefix.as_str()))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIXED: [&str; 4] = ["-Ifoo", "-Lbar", "-lbaz", "-Iqux"];

    #[test]
    fn test_extracts_in_original_order() {
        assert_eq!(extract_pkg_config_items(&MIXED, "I"), vec!["foo", "qux"]);
        assert_eq!(extract_pkg_config_items(&MIXED, "L"), vec!["bar"]);
        assert_eq!(extract_pkg_config_items(&MIXED, "l"), vec!["baz"]);
    }

    #[test]
    fn test_no_match_yields_empty() {
        assert!(extract_pkg_config_items(&["-Ifoo"], "L").is_empty());
    }

    #[test]
    fn test_bare_flag_yields_empty_string() {
        assert_eq!(extract_pkg_config_items(&["-I"], "I"), vec![String::new()]);
    }

    #[test]
    fn test_empty_input() {
        let items: [&str; 0] = [];
        assert!(extract_pkg_config_items(&items, "I").is_empty());
        assert!(extract_pkg_config_items(&items, "").is_empty());
    }

    #[test]
    fn test_case_sensitive() {
        assert!(extract_pkg_config_items(&["-ifoo"], "I").is_empty());
        assert!(extract_pkg_config_items(&["-Ifoo"], "i").is_empty());
    }

    #[test]
    fn test_requires_leading_dash() {
        let items = ["Ifoo", " -Ifoo", "--Ifoo", "-Ifoo"];
        assert_eq!(extract_pkg_config_items(&items, "I"), vec!["foo"]);
    }

    #[test]
    fn test_multi_char_prefix() {
        let items = ["-Wl,-rpath,/opt/lib", "-W", "-Wall"];
        assert_eq!(
            extract_pkg_config_items(&items, "Wl,"),
            vec!["-rpath,/opt/lib"]
        );
    }

    #[test]
    fn test_empty_prefix_strips_single_dash() {
        let items = ["-Ifoo", "bar", "--cflags"];
        assert_eq!(
            extract_pkg_config_items(&items, ""),
            vec!["Ifoo", "-cflags"]
        );
    }

    #[test]
    fn test_only_first_occurrence_is_stripped() {
        assert_eq!(extract_pkg_config_items(&["-I-Ifoo"], "I"), vec!["-Ifoo"]);
    }

    #[test]
    fn test_accepts_owned_strings_and_is_deterministic() {
        let items: Vec<String> = MIXED.iter().map(|s| s.to_string()).collect();
        let first = extract_pkg_config_items(&items, "I");
        let second = extract_pkg_config_items(&items, "I");
        assert_eq!(first, second);
    }

    #[test]
    fn test_non_ascii_payload() {
        assert_eq!(
            extract_pkg_config_items(&["-I/home/使用者/include"], "I"),
            vec!["/home/使用者/include"]
        );
    }
}

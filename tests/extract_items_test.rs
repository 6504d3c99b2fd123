use pkgconf_flags::{extract_pkg_config_items, split_flags, FlagKind, PkgConfigFlags};

const GLIB_OUTPUT: &str = "-I/usr/include/glib-2.0 -I/usr/lib/x86_64-linux-gnu/glib-2.0/include \
-L/usr/lib/x86_64-linux-gnu -lgobject-2.0 -lglib-2.0 -pthread\n";

#[test]
fn test_documented_examples() {
    let items = ["-Ifoo", "-Lbar", "-lbaz", "-Iqux"];
    assert_eq!(extract_pkg_config_items(&items, "I"), vec!["foo", "qux"]);

    assert!(extract_pkg_config_items(&["-Ifoo"], "L").is_empty());
    assert_eq!(extract_pkg_config_items(&["-I"], "I"), vec![""]);

    let empty: Vec<String> = Vec::new();
    assert!(extract_pkg_config_items(&empty, "I").is_empty());
}

#[test]
fn test_empty_input_for_any_prefix() {
    let empty: [&str; 0] = [];
    for prefix in ["", "I", "L", "l", "D", "Wl,", "framework"] {
        assert!(extract_pkg_config_items(&empty, prefix).is_empty());
    }
}

#[test]
fn test_matches_and_non_matches_partition_input() {
    let items = split_flags(GLIB_OUTPUT);

    for prefix in ["I", "L", "l", "D", "p"] {
        let full_prefix = format!("-{}", prefix);
        let expected: Vec<String> = items
            .iter()
            .filter(|s| s.starts_with(&full_prefix))
            .map(|s| s[full_prefix.len()..].to_string())
            .collect();

        assert_eq!(extract_pkg_config_items(&items, prefix), expected);
    }
}

#[test]
fn test_real_pkg_config_output() {
    let items = split_flags(GLIB_OUTPUT);

    assert_eq!(
        extract_pkg_config_items(&items, "I"),
        vec![
            "/usr/include/glib-2.0",
            "/usr/lib/x86_64-linux-gnu/glib-2.0/include"
        ]
    );
    assert_eq!(
        extract_pkg_config_items(&items, "L"),
        vec!["/usr/lib/x86_64-linux-gnu"]
    );
    assert_eq!(
        extract_pkg_config_items(&items, "l"),
        vec!["gobject-2.0", "glib-2.0"]
    );
    assert_eq!(extract_pkg_config_items(&items, "p"), vec!["thread"]);
}

#[test]
fn test_grouped_flags_match_individual_extraction() {
    let items = split_flags(GLIB_OUTPUT);
    let grouped = PkgConfigFlags::from_flags(&items);

    for kind in FlagKind::ALL {
        assert_eq!(
            grouped.values(kind),
            extract_pkg_config_items(&items, kind.prefix()).as_slice()
        );
    }
    assert!(grouped.defines.is_empty());
}

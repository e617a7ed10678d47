use super::*;

fn affix(id: u32, name: &str) -> Affix {
    Affix { id, name: name.to_owned(), description: None, category: None }
}

#[test]
fn format_percent_uses_four_decimals() {
    assert_eq!(format_percent(50.0), "50.0000%");
    assert_eq!(format_percent(0.476_190_476), "0.4762%");
    assert_eq!(format_percent(0.0), "0.0000%");
}

#[test]
fn format_percent_marks_tiny_and_invalid_values() {
    assert_eq!(format_percent(0.000_01), "<0.0001%");
    assert_eq!(format_percent(f64::NAN), "-");
}

#[test]
fn format_count_groups_thousands() {
    assert_eq!(format_count(0), "0");
    assert_eq!(format_count(999), "999");
    assert_eq!(format_count(1_000), "1,000");
    assert_eq!(format_count(1_234_567), "1,234,567");
}

#[test]
fn combination_label_falls_back_to_ids() {
    let affixes = vec![affix(1, "异常伤害"), affix(2, "弹匣容量")];
    assert_eq!(combination_label(&[1, 2], &affixes), "异常伤害、弹匣容量");
    assert_eq!(combination_label(&[2, 9], &affixes), "弹匣容量、#9");
}

#[test]
fn levels_label_joins_with_slashes() {
    assert_eq!(levels_label(&[1, 2, 3, 4]), "1 / 2 / 3 / 4");
    assert_eq!(levels_label(&[]), "");
}

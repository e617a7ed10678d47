use super::*;

fn affix(id: u32) -> Affix {
    Affix { id, name: format!("affix {id}"), description: None, category: None }
}

#[test]
fn toggle_adds_in_sorted_position() {
    assert_eq!(toggle_affix(&[1, 5], 3, None), vec![1, 3, 5]);
}

#[test]
fn toggle_removes_existing_id() {
    assert_eq!(toggle_affix(&[1, 3, 5], 3, None), vec![1, 5]);
}

#[test]
fn toggle_respects_max() {
    assert_eq!(toggle_affix(&[1, 2], 3, Some(2)), vec![1, 2]);
    // Removal is always allowed at the cap.
    assert_eq!(toggle_affix(&[1, 2], 2, Some(2)), vec![1]);
}

#[test]
fn select_all_sorts_dedups_and_caps() {
    let affixes = vec![affix(3), affix(1), affix(2), affix(1)];
    assert_eq!(select_all(&affixes, None), vec![1, 2, 3]);
    assert_eq!(select_all(&affixes, Some(2)), vec![1, 2]);
}

use super::*;

#[test]
fn reveal_indices_follow_input_order() {
    let list = SceneList::new("intro", ["a", "b", "c"]).unwrap();
    assert_eq!(list.intro().kind(), SceneKind::Intro);
    assert_eq!(list.reveal_count(), 3);
    for (i, s) in list.reveals().iter().enumerate() {
        assert_eq!(s.index(), i);
        assert_eq!(s.kind(), SceneKind::Reveal);
    }
    let ids: Vec<&str> = list.iter().map(|s| s.id().as_str()).collect();
    assert_eq!(ids, ["intro", "a", "b", "c"]);
}

#[test]
fn empty_reveal_list_is_valid() {
    let list = SceneList::new("intro", Vec::<String>::new()).unwrap();
    assert_eq!(list.reveal_count(), 0);
    assert_eq!(list.iter().count(), 1);
}

#[test]
fn duplicate_ids_are_rejected() {
    let err = SceneList::new("intro", ["a", "intro"]).unwrap_err();
    assert!(err.is_invalid_configuration());
    assert!(err.to_string().contains("scenes[1]"));

    let err = SceneList::new("x", ["a", "a"]).unwrap_err();
    assert!(err.to_string().contains("duplicate scene id 'a'"));
}

#[test]
fn blank_ids_are_rejected() {
    assert!(SceneList::new(" ", ["a"]).is_err());
    assert!(SceneList::new("intro", [""]).is_err());
}

#[test]
fn intro_and_reveal_indices_are_separate_spaces() {
    let list = SceneList::new("intro", ["a", "b"]).unwrap();
    assert_eq!(list.intro().index(), 0);
    assert_eq!(list.reveals()[0].index(), 0);

    let keys: std::collections::BTreeSet<(bool, usize)> = list
        .iter()
        .map(|s| (s.kind() == SceneKind::Intro, s.index()))
        .collect();
    assert_eq!(keys.len(), 3);
}

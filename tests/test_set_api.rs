use collectix::OrderedSet;

#[test]
fn test_basic_set_functionality() {
    let mut set = OrderedSet::new();

    assert!(set.is_empty());

    set.insert(1);
    set.insert(2);
    set.insert(3);
    set.insert(4);
    set.insert(5);

    assert!(!set.is_empty());
    assert_eq!(set.len(), 5);

    for k in 1..=5 {
        assert!(set.contains(&k));
    }

    set.remove(&3);

    assert_eq!(set.iter().collect::<Vec<&usize>>(), vec![&1, &2, &4, &5]);

    let val = set.pop_first().unwrap();
    assert_eq!(val, 1);

    assert_eq!(set.iter().collect::<Vec<&usize>>(), vec![&2, &4, &5]);

    let val = set.pop_last().unwrap();
    assert_eq!(val, 5);

    assert_eq!(set.iter().collect::<Vec<&usize>>(), vec![&2, &4]);

    assert_eq!(set.len(), 2);

    set.insert(0);
    set.insert(3);
    set.insert(10);

    assert_eq!(set.len(), 5);

    assert_eq!(
        set.iter().collect::<Vec<&usize>>(),
        vec![&0, &2, &3, &4, &10]
    );

    set.clear();
    assert_eq!(set.len(), 0);
    assert!(set.is_empty());

    let empty_vec: Vec<usize> = Vec::new();

    assert_eq!(set.into_iter().collect::<Vec<usize>>(), empty_vec);
}

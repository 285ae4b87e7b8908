use collectix::tree::{Avl, Splay};
use collectix::{DynamicArray, HashMap, KaryHeap, LinkedList, MinHeap, OrderedMap};

#[test]
fn heap_build_from_arbitrary_order_degree_3() {
    let input = [
        2, 5, 1, 7, 2, 8, 6, 6, 1, 0, 2, 5, 0, 1, 7, 9, 3,
    ];
    let mut arr: DynamicArray<i32> = DynamicArray::new();
    for v in input {
        arr.push(v);
    }

    let heap: KaryHeap<i32, 3, MinHeap> = KaryHeap::heapify(arr);
    assert_eq!(*heap.top().unwrap(), 0);

    let expected = [
        0, 1, 1, 0, 2, 3, 6, 6, 2, 1, 2, 5, 7, 5, 7, 9, 8,
    ];
    let layout: Vec<i32> = (0..expected.len())
        .map(|i| *heap.get(i).unwrap())
        .collect();
    assert_eq!(layout, expected);
}

#[test]
fn avl_double_rotation_on_insert_order() {
    let mut m: OrderedMap<i32, (), Avl> = OrderedMap::new();
    m.insert(2, ());
    m.insert(0, ());
    m.insert(1, ());

    let adapter = m.as_tree_adapter();
    let root = adapter.root().unwrap();
    assert_eq!(*adapter.key(root), 1);

    let left = adapter.left(root).unwrap();
    let right = adapter.right(root).unwrap();
    assert_eq!(*adapter.key(left), 0);
    assert_eq!(*adapter.key(right), 2);
    assert!(adapter.left(left).is_none());
    assert!(adapter.right(left).is_none());
    assert!(adapter.left(right).is_none());
    assert!(adapter.right(right).is_none());
}

#[test]
fn splay_find_moves_node_to_root() {
    let mut m: OrderedMap<i32, (), Splay> = OrderedMap::new();
    for k in [2, 5, 1, 7, 2, 8, 6, 6, 1, 0] {
        m.insert(k, ());
    }

    assert!(m.contains_key(&5));

    let adapter = m.as_tree_adapter();
    let root = adapter.root().unwrap();
    assert_eq!(*adapter.key(root), 5);
}

#[test]
fn bst_removal_of_degree_two_node_preserves_structure() {
    let mut m: OrderedMap<i32, ()> = OrderedMap::new();
    for k in [5, 3, 8, 1, 4, 10, 9] {
        m.insert(k, ());
    }
    m.remove(&5);

    let adapter = m.as_tree_adapter();
    let mut preorder = Vec::new();
    let mut stack = adapter.root().into_iter().collect::<Vec<_>>();
    while let Some(idx) = stack.pop() {
        preorder.push(*adapter.key(idx));
        if let Some(r) = adapter.right(idx) {
            stack.push(r);
        }
        if let Some(l) = adapter.left(idx) {
            stack.push(l);
        }
    }
    assert_eq!(preorder, vec![4, 3, 1, 8, 10, 9]);
}

#[test]
fn linked_list_splice_moves_range_between_lists() {
    let mut l1: LinkedList<char> = LinkedList::new();
    for c in ['a', 'b', 'c', 'd', 'e'] {
        l1.push_back(c);
    }
    let mut l2: LinkedList<char> = LinkedList::new();
    for c in ['f', 'g', 'h', 'i', 'j'] {
        l2.push_back(c);
    }

    let mut first = l2.begin();
    first = l2.next(first);
    first = l2.next(first);
    let end = l2.end();

    l1.splice(l1.end(), &mut l2, first, end);

    assert_eq!(l1.iter().copied().collect::<Vec<_>>(), vec!['a', 'b', 'c', 'd', 'e', 'h', 'i', 'j']);
    assert_eq!(l2.iter().copied().collect::<Vec<_>>(), vec!['f', 'g']);
}

#[test]
fn hash_table_grows_past_capacity_on_third_distinct_key_at_half_load() {
    let mut t: HashMap<usize, usize> = HashMap::with_capacity(4);
    t.set_max_load_factor(0.5);

    t.insert(1, 1);
    t.insert(2, 2);
    assert_eq!(t.capacity(), 4);

    t.insert(3, 3);
    assert!(t.capacity() > 4);
}

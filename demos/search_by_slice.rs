use std::mem::size_of_val;

use collectix::OrderedSet;
use smallvec::{smallvec, SmallVec};

const U8_BUF_LEN: usize = 32;

// About:
// * Store 8-byte hexspeak words, e.g. values of type Vec<u8>, in a set.
// * Query by hexspeak words of varying sizes, e.g. values of type &[u8].
fn main() {
    // Two hexspeak words
    let bad_code: Vec<u8> = vec![0xB, 0xA, 0xA, 0xD, 0xC, 0x0, 0xD, 0xE];
    let bad_food: Vec<u8> = vec![0xB, 0xA, 0xA, 0xD, 0xF, 0x0, 0x0, 0xD];

    assert_eq!(size_of_val(&*bad_code), 8);
    assert_eq!(size_of_val(&*bad_food), 8);

    // Store the two words in our set
    let mut set: OrderedSet<Vec<u8>> = OrderedSet::new();
    set.insert(bad_code);
    set.insert(bad_food);

    // SmallVec<[u8; U8_BUF_LEN]> is a sized stack buffer, but slices of it
    // are unsized. Borrow<[u8]> lets us search the set of Vec<u8> keys
    // with a borrowed &[u8] instead of constructing a fresh Vec.
    let bad_food_vec: SmallVec<[u8; U8_BUF_LEN]> =
        smallvec![0xB, 0xA, 0xA, 0xD, 0xF, 0x0, 0x0, 0xD];
    let bad_dude_vec: SmallVec<[u8; U8_BUF_LEN]> =
        smallvec![0xB, 0xA, 0xA, 0xD, 0xD, 0x0, 0x0, 0xD];

    // We're effectively searching for a Vec<u8> present
    assert!(set.contains(&bad_food_vec[..])); // 0xBAADFOOD

    // We're effectively searching for a [u8; 4] not present
    assert!(!set.contains(&bad_food_vec[..4])); // 0xBAAD

    // We're effectively searching for an [u8; 8] not present
    assert!(!set.contains(&bad_dude_vec[..])); // 0xBAADDUDE
}

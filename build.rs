use std::env;
use std::fs;
use std::path::Path;

const CAPACITY_LIMIT: usize = 1 << 20;

fn env_usize(key: &str, default: &str) -> usize {
    println!("cargo:rerun-if-env-changed={}", key);
    let val = env::var(key).unwrap_or_else(|_| {
        println!(
            "cargo:warning=Unset environment variable, using default: '{}={}'",
            key, default
        );
        default.to_string()
    });
    val.parse::<usize>()
        .unwrap_or_else(|_| panic!("{} must be a non-negative integer", key))
}

fn main() {
    let default_capacity = env_usize("CT_DEFAULT_CAPACITY", "8");
    assert!(
        default_capacity >= 1 && default_capacity <= CAPACITY_LIMIT,
        "CT_DEFAULT_CAPACITY out of range"
    );

    let max_load_num = env_usize("CT_MAX_LOAD_NUM", "1");
    let max_load_denom = env_usize("CT_MAX_LOAD_DENOM", "1");
    assert!(max_load_denom >= 1, "CT_MAX_LOAD_DENOM must be positive");
    assert!(
        max_load_num <= max_load_denom * 8,
        "CT_MAX_LOAD_NUM/CT_MAX_LOAD_DENOM is implausibly large for a hash table load factor"
    );

    let out_dir = env::var_os("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("consts.rs");

    fs::write(
        &dest_path,
        format!(
            "pub(crate) const CT_DEFAULT_CAPACITY: usize = {};\n\
             pub(crate) const CT_MAX_LOAD_NUM: usize = {};\n\
             pub(crate) const CT_MAX_LOAD_DENOM: usize = {};\n",
            default_capacity, max_load_num, max_load_denom
        ),
    )
    .unwrap();
}

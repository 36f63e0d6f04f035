use std::env;
use std::fs;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=config.toml");

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");

    // OUT_DIR is target/<profile>/build/<pkg>/out; the binary sits in target/<profile>
    let target_dir = Path::new(&out_dir)
        .ancestors()
        .nth(3)
        .expect("OUT_DIR is nested inside the target profile directory");

    fs::copy("config.toml", target_dir.join("config.toml"))
        .expect("config.toml must exist at the repository root");
}

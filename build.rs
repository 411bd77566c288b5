use std::fs;

fn main() {
    // Templates are embedded with include_dir, rebuild when one changes
    println!("cargo:rerun-if-changed=resources");

    let template_paths = fs::read_dir("resources").unwrap();

    for dir_entry in template_paths {
        let path = dir_entry.unwrap().path();
        println!("cargo:rerun-if-changed={}", path.display());
    }
}

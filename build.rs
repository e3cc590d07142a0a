fn main() {
    // Capture the current timestamp as the build time
    let build_time = chrono::Utc::now().format("%Y-%m-%d").to_string();

    // Exposed to the contact footer through env!
    println!("cargo:rustc-env=BUILD_TIME={}", build_time);

    // Rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=content");
}

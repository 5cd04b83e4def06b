#[cfg(target_os = "windows")]
fn main() {
    use winresource::WindowsResource;

    // Requires res/taskdiary.ico to exist
    let mut res = WindowsResource::new();
    res.set_icon("res/taskdiary.ico")
        .set("FileDescription", "taskdiary CLI")
        .set("ProductName", "taskdiary")
        .set("OriginalFilename", "taskdiary.exe")
        .set("FileVersion", env!("CARGO_PKG_VERSION"))
        .set("ProductVersion", env!("CARGO_PKG_VERSION"))
        .compile()
        .expect("Failed to embed icon resource");
}

#[cfg(not(target_os = "windows"))]
fn main() {}

#[cfg(target_os = "windows")]
fn main() {
    let mut res = winres::WindowsResource::new();
    res.set_icon("assets/icon.ico")
        .set("InternalName", "FolderComparator.exe")
        .set("FileDescription", "Folder Comparator")
        .set_version_info(winres::VersionInfo::PRODUCTVERSION, 0x0000000100000000)
        .set_language(0x0409);
    if let Err(err) = res.compile() {
        eprintln!("winres error: {err}");
    }
}

#[cfg(not(target_os = "windows"))]
fn main() {
    println!("cargo:rerun-if-changed=assets/");
}

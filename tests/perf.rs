use assert_cmd::Command;
use std::fs;
use std::time::Instant;
use tempfile::tempdir;

#[test]
fn perf_scan_5k_files_under_5s() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("bulk");
    for d in 0..50u32 {
        let sub = root.join(format!("mod{}", d));
        fs::create_dir_all(&sub).unwrap();
        for i in 0..100u32 {
            fs::write(sub.join(format!("file{}.rs", i)), b"fn f() {}\n").unwrap();
        }
    }
    fs::create_dir_all(root.join("node_modules/dep")).unwrap();
    for i in 0..1_000u32 {
        fs::write(root.join(format!("node_modules/dep/f{}.js", i)), b"x").unwrap();
    }

    let start = Instant::now();
    Command::cargo_bin("srcdump")
        .unwrap()
        .args(["scan", "--no-color"])
        .arg(&root)
        .assert()
        .success();
    let elapsed = start.elapsed();
    assert!(elapsed.as_secs_f32() < 5.0, "scan took {:?}", elapsed);
}

#[test]
fn perf_combine_5k_files_under_5s() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("bulk");
    fs::create_dir_all(&root).unwrap();
    for i in 0..5_000u32 {
        fs::write(root.join(format!("file{}.txt", i)), b"some text\n").unwrap();
    }

    let start = Instant::now();
    let output = Command::cargo_bin("srcdump")
        .unwrap()
        .args(["combine", "--stdout"])
        .arg(&root)
        .output()
        .unwrap();
    let elapsed = start.elapsed();

    assert!(output.status.success());
    let text = String::from_utf8(output.stdout).unwrap();
    assert_eq!(text.matches("// START OF FILE: ").count(), 5_000);
    assert!(elapsed.as_secs_f32() < 5.0, "combine took {:?}", elapsed);
}

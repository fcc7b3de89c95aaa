use std::path::PathBuf;

#[test]
fn cli_renders_a_deck_to_pngs() {
    if let Err(err) = kanjikabe::fonts::resolve_font() {
        eprintln!("skipping cli smoke test: {err}");
        return;
    }

    let dir = PathBuf::from("target").join("cli_smoke");
    let out_root = dir.join("out");
    let _ = std::fs::remove_dir_all(&out_root);
    std::fs::create_dir_all(&dir).unwrap();

    let deck_path = dir.join("kanji_n5.csv");
    std::fs::write(
        &deck_path,
        "kanji,meaning,readings,compounds\n\
         日,\"day, sun\",ニチ; ひ,毎日 (まいにち) = every day\n",
    )
    .unwrap();

    let exe = std::env::var_os("CARGO_BIN_EXE_kanjikabe")
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            let mut p = PathBuf::from("target").join("debug");
            p.push(if cfg!(windows) {
                "kanjikabe.exe"
            } else {
                "kanjikabe"
            });
            p
        });

    let status = std::process::Command::new(exe)
        .arg(&deck_path)
        .args(["--width", "640", "--height", "360", "--out-dir"])
        .arg(&out_root)
        .status()
        .unwrap();

    assert!(status.success());
    assert!(out_root.join("JLPT-N5").join("JLPT_N5_00001.png").exists());
}

#[test]
fn cli_fails_on_missing_deck() {
    if let Err(err) = kanjikabe::fonts::resolve_font() {
        eprintln!("skipping cli smoke test: {err}");
        return;
    }

    let exe = std::env::var_os("CARGO_BIN_EXE_kanjikabe")
        .map(PathBuf::from)
        .expect("cargo sets CARGO_BIN_EXE_kanjikabe for integration tests");

    let status = std::process::Command::new(exe)
        .arg("target/cli_smoke/does_not_exist_n2.csv")
        .status()
        .unwrap();

    assert!(!status.success());
}

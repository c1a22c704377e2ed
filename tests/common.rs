#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const USER: &str = "admin";
pub const PASSWORD: &str = "admin123";

/// Per-test scratch directory inside the system temp dir, emptied first.
pub fn scratch_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("sehatkan_{name}"));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create scratch dir");
    path
}

/// Binary with an isolated home (no real config is read) and valid credentials.
pub fn sk(home: &PathBuf) -> Command {
    let mut cmd = cargo_bin_cmd!("sehatkan");
    cmd.env("HOME", home)
        .env("APPDATA", home)
        .env("SEHATKAN_USER", USER)
        .env("SEHATKAN_PASSWORD", PASSWORD);
    cmd
}

/// Same as [`sk`] without credentials in the environment.
pub fn sk_anonymous(home: &PathBuf) -> Command {
    let mut cmd = cargo_bin_cmd!("sehatkan");
    cmd.env("HOME", home)
        .env("APPDATA", home)
        .env_remove("SEHATKAN_USER")
        .env_remove("SEHATKAN_PASSWORD");
    cmd
}

/// Paths used by a CLI test: register, photo dir and a source photo.
pub struct Fixture {
    pub home: PathBuf,
    pub store: String,
    pub photos: String,
    pub photo_src: String,
}

impl Fixture {
    pub fn new(name: &str) -> Self {
        let home = scratch_dir(name);
        let store = home.join("register.csv").to_string_lossy().to_string();
        let photos = home.join("photos").to_string_lossy().to_string();
        let photo_src = write_test_png(&home.join("capture.png"));
        Self {
            home,
            store,
            photos,
            photo_src,
        }
    }

    /// Command with `--db` and `--photo-dir` pointing at this fixture.
    pub fn cmd(&self) -> Command {
        let mut cmd = sk(&self.home);
        cmd.args(["--db", &self.store, "--photo-dir", &self.photos]);
        cmd
    }

    pub fn init(&self) {
        self.cmd().args(["--test", "init"]).assert().success();
    }

    /// Add one examination; `extra` overrides or completes the defaults.
    pub fn add(&self, name: &str, national_id: &str, extra: &[&str]) {
        self.cmd()
            .args([
                "add",
                "--name",
                name,
                "--national-id",
                national_id,
                "--photo",
                &self.photo_src,
            ])
            .args(extra)
            .assert()
            .success();
    }

    pub fn out(&self, file: &str) -> String {
        self.home.join(file).to_string_lossy().to_string()
    }

    pub fn register(&self) -> String {
        fs::read_to_string(&self.store).expect("read register")
    }
}

/// Small RGB image written as PNG, usable as a captured photo.
pub fn write_test_png(path: &PathBuf) -> String {
    let img = image::RgbImage::from_fn(8, 8, |x, y| image::Rgb([(x * 30) as u8, (y * 30) as u8, 128]));
    img.save(path).expect("write test png");
    path.to_string_lossy().to_string()
}

/// Write a register file by hand (header + rows, comma separated).
pub fn write_register(path: &str, header: &[&str], rows: &[&[&str]]) {
    let mut wtr = csv::Writer::from_path(path).expect("open register");
    wtr.write_record(header).expect("write header");
    for r in rows {
        wtr.write_record(*r).expect("write row");
    }
    wtr.flush().expect("flush register");
}

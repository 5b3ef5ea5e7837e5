//! Shared integration-test server bootstrap helpers.

use axum_test::TestServer;
use minipaste_server::{create_app, AppState, Config, PasteStore};
use rand::{rngs::StdRng, SeedableRng};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub(crate) const TEST_SEED: u64 = 2024;

pub(crate) fn test_config_for_data_dir(data_dir: &Path) -> Config {
    Config {
        port: 0,
        data_dir: data_dir.to_str().expect("data dir").to_string(),
        assets_dir: data_dir
            .parent()
            .expect("temp root")
            .join("assets")
            .to_str()
            .expect("assets dir")
            .to_string(),
        ..Config::default()
    }
}

pub(crate) fn test_server_for_config(config: Config) -> TestServer {
    let store = PasteStore::open(&config.data_dir, config.id_length).expect("open store");
    let state = AppState::with_rng(config, store, StdRng::seed_from_u64(TEST_SEED));
    let app = create_app(state, false);
    TestServer::new(app).expect("server")
}

pub(crate) fn setup_test_server_with<F>(customize: F) -> (TestServer, TempDir, PathBuf)
where
    F: FnOnce(&mut Config),
{
    let temp_dir = TempDir::new().expect("temp dir");
    let data_dir = temp_dir.path().join("data");
    let mut config = test_config_for_data_dir(&data_dir);
    customize(&mut config);
    let server = test_server_for_config(config);
    (server, temp_dir, data_dir)
}

pub(crate) fn setup_test_server() -> (TestServer, TempDir, PathBuf) {
    setup_test_server_with(|_| {})
}

pub(crate) fn record_names(data_dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(data_dir)
        .expect("read data dir")
        .map(|entry| {
            entry
                .expect("dir entry")
                .file_name()
                .into_string()
                .expect("utf-8 name")
        })
        .collect();
    names.sort();
    names
}

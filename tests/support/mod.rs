use serde_json::{Value, json};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub fn write_document(dir: &Path, name: &str, doc: &Value) {
    if let Some(parent) = dir.join(name).parent() {
        fs::create_dir_all(parent).expect("create fixture directories");
    }
    fs::write(dir.join(name), serde_json::to_string_pretty(doc).unwrap())
        .expect("write fixture document");
}

/// A store holding the three marvin@1.0.0 profiles used across the suite,
/// spread over nested directories to exercise recursive discovery.
pub fn marvin_store() -> TempDir {
    let temp = TempDir::new().expect("temp store");
    write_document(
        temp.path(),
        "audio/marvin-speaker.json",
        &json!({
            "id": "marvin@1.0.0",
            "attributes": ["aarch64", "Speaker"],
            "location": "http://modules.example/marvin-speaker.wasm"
        }),
    );
    write_document(
        temp.path(),
        "video/marvin-camera.json",
        &json!({
            "id": "marvin@1.0.0",
            "attributes": ["aarch64", "Camera"],
            "location": "http://modules.example/marvin-camera.wasm"
        }),
    );
    write_document(
        temp.path(),
        "cloud/marvin-full.json",
        &json!({
            "id": "marvin@1.0.0",
            "attributes": ["aarch64", "Speaker", "Camera", "Kubernetes"],
            "location": "http://modules.example/marvin-full.wasm"
        }),
    );
    temp
}

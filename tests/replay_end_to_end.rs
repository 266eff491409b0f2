use std::path::Path;
use std::sync::Arc;

use smartcam_cache::application::{RefreshOutcome, SetupSmartcamsUseCase, SmartcamSettings};
use smartcam_cache::domain::{CameraPort, SmartcamImageId};
use smartcam_cache::infrastructure::{ReplaySession, ShutdownHooks};
use tempfile::TempDir;

fn write_overview(path: &Path, image_ids: &[&str]) {
    let images: Vec<String> = image_ids
        .iter()
        .map(|id| format!(r#"{{"imageId": "{id}"}}"#))
        .collect();
    let json = format!(
        r#"{{
            "customerImageCameras": [{{"deviceLabel": "3C2P 8XYZ", "area": "Living room"}}],
            "imageSeries": [{{"deviceLabel": "3C2P 8XYZ", "image": [{}]}}]
        }}"#,
        images.join(",")
    );
    std::fs::write(path, json).unwrap();
}

#[tokio::test]
async fn replayed_captures_rotate_through_single_slot() {
    let mirror = TempDir::new().unwrap();
    let storage = TempDir::new().unwrap();
    let overview = mirror.path().join("overview.json");
    std::fs::write(mirror.path().join("img123.jpg"), b"first capture").unwrap();
    std::fs::write(mirror.path().join("img456.jpg"), b"second capture").unwrap();
    write_overview(&overview, &["-1"]);

    let session = Arc::new(
        ReplaySession::open(overview.clone(), mirror.path().to_path_buf())
            .await
            .unwrap(),
    );
    let hooks = Arc::new(ShutdownHooks::new());
    let cameras = SetupSmartcamsUseCase::new(session.clone(), session, hooks.clone())
        .execute(&SmartcamSettings::new(storage.path().to_path_buf()))
        .unwrap();
    assert_eq!(cameras.len(), 1);
    let camera = &cameras[0];
    assert_eq!(CameraPort::name(camera).as_deref(), Some("Living room"));

    assert_eq!(camera.refresh().await.unwrap(), RefreshOutcome::Pending);
    assert!(CameraPort::camera_image(camera).await.is_none());

    write_overview(&overview, &["img123"]);
    let image = CameraPort::camera_image(camera).await.unwrap();
    assert_eq!(&image[..], b"first capture");
    assert!(storage.path().join("img123.jpg").exists());

    write_overview(&overview, &["img456", "img123"]);
    let image = CameraPort::camera_image(camera).await.unwrap();
    assert_eq!(&image[..], b"second capture");
    assert!(storage.path().join("img456.jpg").exists());
    assert!(!storage.path().join("img123.jpg").exists());
    assert_eq!(camera.current_image_id(), Some(SmartcamImageId::new("img456")));

    // Capture not mirrored yet: the previous image stays servable.
    write_overview(&overview, &["img789"]);
    let image = CameraPort::camera_image(camera).await.unwrap();
    assert_eq!(&image[..], b"second capture");

    hooks.fire().unwrap();
    assert_eq!(std::fs::read_dir(storage.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn disabled_platform_leaves_storage_untouched() {
    let mirror = TempDir::new().unwrap();
    let overview = mirror.path().join("overview.json");
    write_overview(&overview, &["img123"]);

    let session = Arc::new(
        ReplaySession::open(overview, mirror.path().to_path_buf())
            .await
            .unwrap(),
    );
    let hooks = Arc::new(ShutdownHooks::new());
    let cameras = SetupSmartcamsUseCase::new(session.clone(), session, hooks.clone())
        .execute(&SmartcamSettings::disabled(mirror.path().join("nowhere")))
        .unwrap();

    assert!(cameras.is_empty());
    assert!(hooks.is_empty());
}

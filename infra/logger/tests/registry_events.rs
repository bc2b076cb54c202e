use adi_kernel::domain::decorator::{Decorator, ServiceType};
use adi_kernel::domain::features::NoFeatures;
use adi_kernel::registry::DecoratorRegistry;
use adi_logger::{Logger, LoggerError, Rotation};
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

trait Greeter {}
struct CachingGreeter;

#[test]
fn kernel_filter_captures_registration_events() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let log_dir = tmp_dir.path().join("logs");

    let logger = Logger::builder()
        .name("registry")
        .console(false)
        .env_filter("adi_kernel=debug")
        .path(&log_dir)
        .rotation(Rotation::NEVER)
        .init()?;

    let err = Logger::builder()
        .name("registry")
        .init()
        .expect_err("a second global subscriber should be rejected");
    assert!(matches!(err, LoggerError::Subscriber { .. }));

    let mut registry = DecoratorRegistry::<NoFeatures>::new();
    registry.register_descriptor(
        ServiceType::of::<CachingGreeter>(),
        Decorator::builder().service::<dyn Greeter>().order(3).build(),
    )?;
    tracing::debug!("outside the kernel target");

    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let log_file = fs::read_dir(&log_dir)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .expect("log file should be created");

    let contents = fs::read_to_string(log_file)?;
    let line = contents
        .lines()
        .find(|line| line.contains("Decorator registered"))
        .expect("registration event should pass the kernel filter");
    assert!(line.contains("CachingGreeter"));
    assert!(line.contains("order=3"));
    assert!(!contents.contains("outside the kernel target"));

    Ok(())
}

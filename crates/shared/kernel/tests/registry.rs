use adi_kernel::prelude::*;
use bitflags::bitflags;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Flags: u32 {
        const LOGGING = 1 << 0;
        const METRICS = 1 << 1;
    }
}

impl FeatureFlag for Flags {}

trait Greeter {}
trait Clock {}

struct Logging;
struct Metrics;
struct Caching;
struct Retry;
struct KeyedAudit;

impl Decorates<Flags> for Logging {
    fn decorator() -> Decorator<Flags> {
        Decorator::builder().service::<dyn Greeter>().order(2).feature(Flags::LOGGING).build()
    }
}

impl Decorates<Flags> for Metrics {
    fn decorator() -> Decorator<Flags> {
        Decorator::builder().service::<dyn Greeter>().order(1).feature(Flags::METRICS).build()
    }
}

impl Decorates<Flags> for Caching {
    fn decorator() -> Decorator<Flags> {
        Decorator::builder().service::<dyn Greeter>().order(2).build()
    }
}

impl Decorates<Flags> for Retry {
    fn decorator() -> Decorator<Flags> {
        Decorator::builder().order(-4).build()
    }
}

impl Decorates<Flags> for KeyedAudit {
    fn decorator() -> Decorator<Flags> {
        Decorator::builder().service::<dyn Greeter>().key("primary").build()
    }
}

fn populated() -> DecoratorRegistry<Flags> {
    let mut registry = DecoratorRegistry::new();
    registry.register::<Logging>().expect("register logging");
    registry.register::<Metrics>().expect("register metrics");
    registry.register::<Caching>().expect("register caching");
    registry.register::<Retry>().expect("register retry");
    registry.register::<KeyedAudit>().expect("register keyed audit");
    registry
}

fn names(entries: &[&DecoratorEntry<Flags>]) -> Vec<ServiceType> {
    entries.iter().map(|e| e.implementation()).collect()
}

#[test]
fn duplicate_registration_is_rejected() {
    let mut registry = populated();
    let err = registry.register::<Logging>().expect_err("second registration should fail");
    assert!(matches!(err, RegistryError::Duplicate { .. }));
    assert!(err.to_string().contains("Logging"));
    assert_eq!(registry.len(), 5);
}

#[test]
fn lookup_by_implementation() {
    let registry = populated();
    let entry = registry.get(ServiceType::of::<Retry>()).expect("retry registered");
    assert_eq!(entry.decorator().decoration_order(), 1);
    assert!(registry.get(ServiceType::of::<String>()).is_none());
    assert!(!registry.is_empty());
}

#[test]
fn chain_is_sorted_and_filtered_by_feature() {
    let registry = populated();
    let greeter = ServiceType::of::<dyn Greeter>();

    let all = registry.chain_for(greeter, None, Flags::all());
    assert_eq!(
        names(&all),
        vec![
            ServiceType::of::<Metrics>(),
            ServiceType::of::<Logging>(),
            ServiceType::of::<Caching>(),
        ]
    );

    let logging_only = registry.chain_for(greeter, None, Flags::LOGGING);
    assert_eq!(names(&logging_only), vec![ServiceType::of::<Logging>(), ServiceType::of::<Caching>()]);

    let none_active = registry.chain_for(greeter, None, Flags::empty());
    assert_eq!(names(&none_active), vec![ServiceType::of::<Caching>()]);
}

#[test]
fn keyed_chain_only_matches_its_key() {
    let registry = populated();
    let greeter = ServiceType::of::<dyn Greeter>();

    let keyed = registry.chain_for(greeter, Some("primary"), Flags::empty());
    assert_eq!(names(&keyed), vec![ServiceType::of::<KeyedAudit>()]);
    assert!(registry.chain_for(greeter, Some("secondary"), Flags::all()).is_empty());
    assert!(registry.chain_for(ServiceType::of::<dyn Clock>(), None, Flags::all()).is_empty());
}

#[test]
fn unresolved_entries_are_left_to_the_engine() {
    let registry = populated();
    let unresolved: Vec<_> = registry.unresolved().map(DecoratorEntry::implementation).collect();
    assert_eq!(unresolved, vec![ServiceType::of::<Retry>()]);

    let enabled = registry.enabled(Flags::empty());
    assert_eq!(enabled.first().map(|e| e.implementation()), Some(ServiceType::of::<Retry>()));
}

#[test]
fn plain_registry_never_filters() {
    let mut registry = DecoratorRegistry::<NoFeatures>::new();
    registry
        .register_descriptor(
            ServiceType::of::<Logging>(),
            Decorator::plain(Some(ServiceType::of::<dyn Greeter>()), 0, None, true),
        )
        .expect("register plain");

    let chain = registry.chain_for(ServiceType::of::<dyn Greeter>(), None, NoFeatures::empty());
    assert_eq!(chain.len(), 1);
    assert!(chain[0].decorator().treat_open_generics_as_wildcard());
    assert_eq!(registry.iter().count(), 1);
}

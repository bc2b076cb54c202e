#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros for the ADI workspace.
//! * [`decorator`] declares decoration metadata on an implementation type, replacing
//!   runtime attribute discovery with a generated `Decorates` impl.
//! * [`adi_error`] wires up `thiserror` enums with context support.
//!
//! ## Usage
//! Generated code refers to `::adi_kernel`, so consumers depend on it directly:
//! ```toml
//! [dependencies]
//! adi-derive = { path = "../infra/derive" }
//! adi-kernel = { path = "../crates/shared/kernel" }
//! ```

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemStruct, parse_macro_input};

/// Attribute macro to declare a struct as a decorator of an existing service.
///
/// Implements `adi_kernel::domain::registry::Decorates<F>` for the annotated struct.
/// The struct itself is emitted unchanged.
///
/// # Arguments
///
/// All arguments are optional:
///
/// * `service = <Type>` - Decorated service (e.g. `dyn Greeter`). Omit it to let the
///   registration engine pick the first implemented interface.
/// * `order = <expr>` - Decoration order (`i32`, default 1, values below 1 become 1).
/// * `key = "<str>"` - Keyed-service slot.
/// * `flags = <Type>` - Feature flag type. Defaults to `NoFeatures`.
/// * `feature = <expr>` - Feature gate; requires `flags`.
/// * `open_generics_wildcard` or `open_generics_wildcard = <bool>` - Apply an open-generic
///   decorator to every closed registration of its service.
///
/// # Errors
/// Emits a compile-time error for unknown or repeated arguments, for `feature` without
/// `flags`, and for structs with lifetime parameters.
///
/// # Example
///
/// ```rust,ignore
/// use adi_derive::decorator;
///
/// #[decorator(service = dyn Greeter, order = 2, key = "primary", flags = Flags, feature = Flags::LOGGING)]
/// pub struct LoggingGreeter {
///     inner: Box<dyn Greeter>,
/// }
///
/// #[decorator(service = dyn Handler<()>, open_generics_wildcard)]
/// pub struct RetryHandler<T> {
///     inner: Box<dyn Handler<T>>,
/// }
/// ```
#[proc_macro_attribute]
pub fn decorator(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::decorator::expand_decorator(args.into(), input).into()
}

/// A high-level attribute macro for defining domain-specific error enums.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` when missing.
/// * **Context Support**: Generates a companion `<ErrorName>Ext` trait that adds `.context()`
///   to any `Result` that can be converted into this error type.
/// * **Standard Conversions**: Implements `From<T>` for variants containing a source field,
///   enabling the use of the `?` operator for upstream errors.
/// * **Internal Fallback**: Provides `From<&'static str>` and `From<String>` if an `Internal`
///   variant is present.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum** with named-field variants.
/// 2. Variants with a source (`source` field, or a field marked `#[source]`/`#[from]`) must
///    include a `context: Option<Cow<'static, str>>` field.
///
/// # Example
///
/// ```rust,ignore
/// use adi_derive::adi_error;
/// use std::borrow::Cow;
///
/// #[adi_error]
/// pub enum ConfigError {
///     #[error("Config error{}: {source}", format_context(.context))]
///     Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
///
///     #[error("Internal fault{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
/// ```
#[proc_macro_attribute]
pub fn adi_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}

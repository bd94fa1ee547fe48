//! Macros for wiring entities to the engine.

/// Implement [`Stater`](crate::core::Stater) for a type by forwarding to an
/// embedded [`StateField`](crate::core::StateField).
///
/// # Example
///
/// ```
/// use turnstile::core::{StateField, Stater};
/// use turnstile::impl_stater;
///
/// #[derive(Default)]
/// pub struct Order {
///     pub id: u64,
///     pub address: String,
///     pub transition: StateField,
/// }
///
/// impl_stater!(Order, transition);
///
/// let mut order = Order::default();
/// order.set_state("draft");
/// assert_eq!(order.state(), "draft");
/// assert_eq!(order.transition.as_str(), "draft");
/// ```
#[macro_export]
macro_rules! impl_stater {
    ($ty:ty, $field:ident) => {
        impl $crate::core::Stater for $ty {
            fn state(&self) -> &str {
                $crate::core::Stater::state(&self.$field)
            }

            fn set_state(&mut self, name: &str) {
                $crate::core::Stater::set_state(&mut self.$field, name)
            }
        }
    };
}

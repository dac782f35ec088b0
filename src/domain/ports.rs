use crate::domain::model::JoinPoint;

/// A buyer bean.
pub trait Buy: Send + Sync {
    fn buy(&self) -> String;
    fn buy_price(&self, price: f64) -> String;
}

/// Cross-cutting behavior run around an intercepted call.
///
/// Advice observes calls; it never replaces the target's result.
pub trait Advice: Send + Sync {
    fn name(&self) -> &str;

    fn before(&self, _join_point: &JoinPoint<'_>) {}

    fn after_returning(&self, _join_point: &JoinPoint<'_>, _result: &str) {}
}

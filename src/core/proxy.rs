use crate::core::advice::Advisor;
use crate::domain::model::{BuyMethod, JoinPoint};
use crate::domain::ports::Buy;

/// Forwarding wrapper that runs matching advice around every call on `T`.
///
/// `before` advice runs in registration order, `after_returning` in reverse,
/// and the target's result is handed back untouched.
pub struct BuyProxy<T> {
    bean_name: String,
    target: T,
    advisors: Vec<Advisor>,
}

impl<T: Buy> BuyProxy<T> {
    pub fn new(bean_name: impl Into<String>, target: T, advisors: Vec<Advisor>) -> Self {
        Self {
            bean_name: bean_name.into(),
            target,
            advisors,
        }
    }

    /// A proxy without advice.
    pub fn passthrough(bean_name: impl Into<String>, target: T) -> Self {
        Self::new(bean_name, target, Vec::new())
    }

    pub fn bean_name(&self) -> &str {
        &self.bean_name
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn advisor_count(&self) -> usize {
        self.advisors.len()
    }

    fn invoke(&self, method: BuyMethod, price: Option<f64>, call: impl FnOnce(&T) -> String) -> String {
        let join_point = JoinPoint {
            bean: &self.bean_name,
            method,
            price,
        };

        let chain: Vec<&Advisor> = self
            .advisors
            .iter()
            .filter(|a| a.pointcut.matches(&join_point))
            .collect();

        for advisor in &chain {
            advisor.advice.before(&join_point);
        }

        let result = call(&self.target);

        for advisor in chain.iter().rev() {
            advisor.advice.after_returning(&join_point, &result);
        }

        result
    }
}

impl<T: Buy> Buy for BuyProxy<T> {
    fn buy(&self) -> String {
        self.invoke(BuyMethod::Buy, None, |t| t.buy())
    }

    fn buy_price(&self, price: f64) -> String {
        self.invoke(BuyMethod::BuyPrice, Some(price), |t| t.buy_price(price))
    }
}

impl<T> std::fmt::Debug for BuyProxy<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BuyProxy")
            .field("bean_name", &self.bean_name)
            .field("target", &std::any::type_name::<T>())
            .field("advisors", &self.advisors)
            .finish()
    }
}

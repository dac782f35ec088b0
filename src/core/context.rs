//! The bean container.
//!
//! Beans are registered explicitly through [`ContextBuilder`] (or through
//! [`ApplicationContext::from_config`], which walks the component catalog)
//! and every bean is stored behind a [`BuyProxy`]. With interception enabled
//! the proxy carries the configured advisors; otherwise it forwards directly.
//!
//! # Examples
//!
//! ```
//! use buyer_aop::app::buyers::{Boy, Girl};
//! use buyer_aop::core::context::ApplicationContext;
//! use buyer_aop::Buy;
//!
//! let context = ApplicationContext::builder()
//!     .register("boy", Boy)
//!     .register("girl", Girl)
//!     .build()?;
//!
//! let boy = context.get_bean_as::<Boy>("boy")?;
//! let girl = context.get_bean("girl")?;
//! assert_eq!(boy.buy(), "男孩买了一个游戏机");
//! assert_eq!(girl.buy_price(99.8), "女孩花了99.8元买了一件漂亮的衣服");
//! # Ok::<(), buyer_aop::AopError>(())
//! ```

use crate::config::AppConfig;
use crate::core::advice::Advisor;
use crate::core::proxy::BuyProxy;
use crate::core::wiring;
use crate::domain::ports::Buy;
use crate::utils::error::{AopError, Result};
use crate::utils::validation::validate_bean_name;
use std::any::{Any, TypeId};
use std::collections::BTreeMap;
use std::sync::Arc;

struct BeanEntry {
    type_id: TypeId,
    type_name: &'static str,
    /// False for interface-only proxies: typed lookups are refused.
    target_visible: bool,
    service: Arc<dyn Buy>,
    instance: Arc<dyn Any + Send + Sync>,
}

type BeanFactory = Box<dyn FnOnce(&str, Vec<Advisor>, bool) -> BeanEntry>;

struct PendingBean {
    name: String,
    factory: BeanFactory,
}

pub struct ApplicationContext {
    beans: BTreeMap<String, BeanEntry>,
}

impl ApplicationContext {
    pub fn builder() -> ContextBuilder {
        ContextBuilder::new()
    }

    /// Wire a context from configuration: advisors first, then every scanned component.
    ///
    /// The `[aspect]` advisors are only built when interception is enabled.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let mut builder = ContextBuilder::new()
            .proxy_enabled(config.aspect.enabled)
            .proxy_target_class(config.aspect.proxy_target_class);

        if config.aspect.enabled {
            for advisor in config.aspect.build_advisors()? {
                builder = builder.advisor(advisor);
            }
        }

        for name in &config.context.scan {
            builder = wiring::register_component(builder, name)?;
        }

        builder.build()
    }

    /// Look a bean up by name.
    pub fn get_bean(&self, name: &str) -> Result<Arc<dyn Buy>> {
        self.entry(name).map(|e| Arc::clone(&e.service))
    }

    /// Look a bean up by name and check it is a `T`.
    pub fn get_bean_as<T: Buy + 'static>(&self, name: &str) -> Result<Arc<BuyProxy<T>>> {
        let entry = self.entry(name)?;
        Self::downcast(name, entry)
    }

    /// Resolve the single bean whose concrete type is `T`.
    pub fn get_bean_of_type<T: Buy + 'static>(&self) -> Result<Arc<BuyProxy<T>>> {
        let wanted = TypeId::of::<T>();
        let matches: Vec<(&String, &BeanEntry)> = self
            .beans
            .iter()
            .filter(|(_, e)| e.type_id == wanted && e.target_visible)
            .collect();

        match matches.as_slice() {
            [(name, entry)] => Self::downcast(name, entry),
            _ => Err(AopError::NoUniqueBean {
                type_name: std::any::type_name::<T>().to_string(),
                count: matches.len(),
            }),
        }
    }

    pub fn contains_bean(&self, name: &str) -> bool {
        self.beans.contains_key(name)
    }

    /// Registered bean names in sorted order.
    pub fn bean_names(&self) -> Vec<&str> {
        self.beans.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.beans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.beans.is_empty()
    }

    fn entry(&self, name: &str) -> Result<&BeanEntry> {
        self.beans.get(name).ok_or_else(|| AopError::NoSuchBean {
            name: name.to_string(),
        })
    }

    fn downcast<T: Buy + 'static>(name: &str, entry: &BeanEntry) -> Result<Arc<BuyProxy<T>>> {
        let not_required = || AopError::BeanNotOfRequiredType {
            name: name.to_string(),
            expected: std::any::type_name::<T>().to_string(),
            actual: if entry.target_visible {
                entry.type_name.to_string()
            } else {
                format!("interface proxy of {}", entry.type_name)
            },
        };

        if !entry.target_visible || entry.type_id != TypeId::of::<T>() {
            return Err(not_required());
        }

        Arc::clone(&entry.instance)
            .downcast::<BuyProxy<T>>()
            .map_err(|_| not_required())
    }
}

impl std::fmt::Debug for ApplicationContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.beans.iter().map(|(k, e)| (k, e.type_name)))
            .finish()
    }
}

/// Programmatic wiring for [`ApplicationContext`].
///
/// Registration errors (bad or duplicate names) are reported by [`ContextBuilder::build`].
pub struct ContextBuilder {
    pending: Vec<PendingBean>,
    advisors: Vec<Advisor>,
    proxy_enabled: bool,
    proxy_target_class: bool,
}

impl ContextBuilder {
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
            advisors: Vec::new(),
            proxy_enabled: true,
            proxy_target_class: true,
        }
    }

    pub fn register<T: Buy + 'static>(mut self, name: impl Into<String>, instance: T) -> Self {
        let factory: BeanFactory = Box::new(move |name, advisors, target_visible| {
            let proxy = Arc::new(BuyProxy::new(name, instance, advisors));
            BeanEntry {
                type_id: TypeId::of::<T>(),
                type_name: std::any::type_name::<T>(),
                target_visible,
                service: proxy.clone(),
                instance: proxy,
            }
        });
        self.pending.push(PendingBean {
            name: name.into(),
            factory,
        });
        self
    }

    pub fn advisor(mut self, advisor: Advisor) -> Self {
        self.advisors.push(advisor);
        self
    }

    pub fn proxy_enabled(mut self, enabled: bool) -> Self {
        self.proxy_enabled = enabled;
        self
    }

    pub fn proxy_target_class(mut self, enabled: bool) -> Self {
        self.proxy_target_class = enabled;
        self
    }

    pub fn build(self) -> Result<ApplicationContext> {
        let (advisors, target_visible) = if self.proxy_enabled {
            (self.advisors, self.proxy_target_class)
        } else {
            (Vec::new(), true)
        };

        let mut beans = BTreeMap::new();
        for pending in self.pending {
            validate_bean_name("bean name", &pending.name)?;
            if beans.contains_key(&pending.name) {
                return Err(AopError::DuplicateBean { name: pending.name });
            }

            let entry = (pending.factory)(&pending.name, advisors.clone(), target_visible);
            tracing::debug!(
                "📦 Registered bean '{}' ({}, {} advisor(s))",
                pending.name,
                entry.type_name,
                advisors.len()
            );
            beans.insert(pending.name, entry);
        }

        tracing::info!("Application context ready with {} bean(s)", beans.len());
        Ok(ApplicationContext { beans })
    }
}

impl Default for ContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}

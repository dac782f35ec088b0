use crate::domain::model::{BuyMethod, Invocation, JoinPoint};
use crate::domain::ports::Advice;
use crate::utils::error::{AopError, Result};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Selects the calls an advisor applies to. `None` matches anything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pointcut {
    pub bean: Option<String>,
    pub method: Option<BuyMethod>,
}

impl Pointcut {
    pub fn any() -> Self {
        Self::default()
    }

    pub fn bean(mut self, name: impl Into<String>) -> Self {
        self.bean = Some(name.into());
        self
    }

    pub fn method(mut self, method: BuyMethod) -> Self {
        self.method = Some(method);
        self
    }

    /// Build from config patterns, where `*` means any.
    pub fn parse(bean: &str, method: &str) -> Result<Self> {
        let bean = match bean {
            "*" => None,
            name => Some(name.to_string()),
        };
        let method = match method {
            "*" => None,
            other => Some(BuyMethod::parse(other).ok_or_else(|| {
                AopError::InvalidConfigValueError {
                    field: "aspect.advisors.method".to_string(),
                    value: other.to_string(),
                    reason: "Expected one of: *, buy, buy_price".to_string(),
                }
            })?),
        };
        Ok(Self { bean, method })
    }

    pub fn matches(&self, join_point: &JoinPoint<'_>) -> bool {
        self.bean.as_deref().map_or(true, |b| b == join_point.bean)
            && self.method.map_or(true, |m| m == join_point.method)
    }
}

#[derive(Clone)]
pub struct Advisor {
    pub pointcut: Pointcut,
    pub advice: Arc<dyn Advice>,
}

impl Advisor {
    pub fn new<A: Advice + 'static>(pointcut: Pointcut, advice: A) -> Self {
        Self {
            pointcut,
            advice: Arc::new(advice),
        }
    }
}

impl std::fmt::Debug for Advisor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Advisor")
            .field("pointcut", &self.pointcut)
            .field("advice", &self.advice.name())
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
}

impl LogLevel {
    pub const NAMES: [&'static str; 4] = ["trace", "debug", "info", "warn"];

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "trace" => Some(LogLevel::Trace),
            "debug" => Some(LogLevel::Debug),
            "info" => Some(LogLevel::Info),
            "warn" => Some(LogLevel::Warn),
            _ => None,
        }
    }
}

// tracing macros need a constant level, hence the match per call site.
macro_rules! log_at {
    ($level:expr, $($arg:tt)+) => {
        match $level {
            LogLevel::Trace => tracing::trace!($($arg)+),
            LogLevel::Debug => tracing::debug!($($arg)+),
            LogLevel::Info => tracing::info!($($arg)+),
            LogLevel::Warn => tracing::warn!($($arg)+),
        }
    };
}

/// Logs every intercepted call through `tracing`.
#[derive(Debug, Clone, Default)]
pub struct LoggingAdvice {
    level: LogLevel,
}

impl LoggingAdvice {
    pub fn new(level: LogLevel) -> Self {
        Self { level }
    }
}

impl Advice for LoggingAdvice {
    fn name(&self) -> &str {
        "logging"
    }

    fn before(&self, jp: &JoinPoint<'_>) {
        log_at!(
            self.level,
            bean = jp.bean,
            method = jp.method.as_str(),
            price = ?jp.price,
            "🛒 before purchase"
        );
    }

    fn after_returning(&self, jp: &JoinPoint<'_>, result: &str) {
        log_at!(
            self.level,
            bean = jp.bean,
            method = jp.method.as_str(),
            result,
            "✅ purchase returned"
        );
    }
}

/// Keeps every intercepted call in memory. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct RecordingAdvice {
    events: Arc<Mutex<Vec<RecordedEvent>>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RecordedEvent {
    Before { bean: String, method: BuyMethod },
    AfterReturning(Invocation),
}

impl RecordingAdvice {
    pub fn new() -> Self {
        Self::default()
    }

    // A panic inside another advice must not drop recorded events.
    fn lock(&self) -> MutexGuard<'_, Vec<RecordedEvent>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn events(&self) -> Vec<RecordedEvent> {
        self.lock().clone()
    }

    pub fn invocations(&self) -> Vec<Invocation> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                RecordedEvent::AfterReturning(inv) => Some(inv),
                RecordedEvent::Before { .. } => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn push(&self, event: RecordedEvent) {
        self.lock().push(event);
    }
}

impl Advice for RecordingAdvice {
    fn name(&self) -> &str {
        "recording"
    }

    fn before(&self, jp: &JoinPoint<'_>) {
        self.push(RecordedEvent::Before {
            bean: jp.bean.to_string(),
            method: jp.method,
        });
    }

    fn after_returning(&self, jp: &JoinPoint<'_>, result: &str) {
        self.push(RecordedEvent::AfterReturning(Invocation::new(jp, result)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jp(bean: &str, method: BuyMethod) -> JoinPoint<'_> {
        JoinPoint {
            bean,
            method,
            price: None,
        }
    }

    #[test]
    fn test_any_pointcut_matches_everything() {
        let pc = Pointcut::any();
        assert!(pc.matches(&jp("boy", BuyMethod::Buy)));
        assert!(pc.matches(&jp("girl", BuyMethod::BuyPrice)));
    }

    #[test]
    fn test_pointcut_narrowed_by_bean_and_method() {
        let pc = Pointcut::any().bean("girl").method(BuyMethod::BuyPrice);
        assert!(pc.matches(&jp("girl", BuyMethod::BuyPrice)));
        assert!(!pc.matches(&jp("girl", BuyMethod::Buy)));
        assert!(!pc.matches(&jp("boy", BuyMethod::BuyPrice)));
    }

    #[test]
    fn test_parse_pointcut_patterns() {
        assert_eq!(Pointcut::parse("*", "*").unwrap(), Pointcut::any());
        assert_eq!(
            Pointcut::parse("boy", "buy").unwrap(),
            Pointcut::any().bean("boy").method(BuyMethod::Buy)
        );
        assert!(Pointcut::parse("boy", "sell").is_err());
    }

    #[test]
    fn test_recording_advice_shares_buffer_across_clones() {
        let advice = RecordingAdvice::new();
        let clone = advice.clone();

        let point = jp("boy", BuyMethod::Buy);
        clone.before(&point);
        clone.after_returning(&point, "ok");

        assert_eq!(advice.events().len(), 2);
        assert_eq!(advice.invocations()[0].result, "ok");

        advice.clear();
        assert!(clone.events().is_empty());
    }

    #[test]
    fn test_log_level_parse() {
        assert_eq!(LogLevel::parse("debug"), Some(LogLevel::Debug));
        assert_eq!(LogLevel::parse("loud"), None);
    }

    #[test]
    fn test_recording_survives_poisoned_lock() {
        let advice = RecordingAdvice::new();
        let events = Arc::clone(&advice.events);
        let _ = std::thread::spawn(move || {
            let _guard = events.lock().unwrap();
            panic!("poison the buffer");
        })
        .join();
        assert!(advice.events.is_poisoned());

        advice.before(&jp("girl", BuyMethod::Buy));
        assert_eq!(advice.events().len(), 1);
    }

    mod logging {
        use super::*;
        use crate::app::buyers::Boy;
        use crate::core::proxy::BuyProxy;
        use crate::domain::ports::Buy;
        use tracing_subscriber::fmt::MakeWriter;

        #[derive(Clone, Default)]
        struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

        impl SharedBuffer {
            fn contents(&self) -> String {
                String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
            }
        }

        impl std::io::Write for SharedBuffer {
            fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
                self.0.lock().unwrap().extend_from_slice(buf);
                Ok(buf.len())
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        impl<'a> MakeWriter<'a> for SharedBuffer {
            type Writer = SharedBuffer;

            fn make_writer(&'a self) -> Self::Writer {
                self.clone()
            }
        }

        fn capture(max_level: tracing::Level, calls: impl FnOnce()) -> String {
            let buffer = SharedBuffer::default();
            let subscriber = tracing_subscriber::fmt()
                .with_writer(buffer.clone())
                .with_max_level(max_level)
                .with_ansi(false)
                .finish();
            tracing::subscriber::with_default(subscriber, calls);
            buffer.contents()
        }

        fn logged_boy() -> BuyProxy<Boy> {
            BuyProxy::new(
                "boy",
                Boy,
                vec![Advisor::new(Pointcut::any(), LoggingAdvice::new(LogLevel::Debug))],
            )
        }

        #[test]
        fn test_logging_advice_emits_before_and_after_events() {
            let boy = logged_boy();
            let output = capture(tracing::Level::DEBUG, || {
                assert_eq!(boy.buy_price(35.0), "男孩花了35元买了一个游戏机");
            });

            let lines: Vec<&str> = output.lines().collect();
            assert_eq!(lines.len(), 2, "unexpected log output:\n{}", output);

            assert!(lines[0].contains("DEBUG"));
            assert!(lines[0].contains("before purchase"));
            assert!(lines[0].contains("bean=\"boy\""));
            assert!(lines[0].contains("method=\"buy_price\""));
            assert!(lines[0].contains("price=Some(35.0)"));

            assert!(lines[1].contains("purchase returned"));
            assert!(lines[1].contains("method=\"buy_price\""));
            assert!(lines[1].contains("男孩花了35元买了一个游戏机"));
        }

        #[test]
        fn test_logging_advice_respects_subscriber_level() {
            let boy = logged_boy();
            let output = capture(tracing::Level::WARN, || {
                boy.buy();
                boy.buy_price(1.0);
            });
            assert!(output.is_empty(), "debug events leaked:\n{}", output);
        }
    }
}

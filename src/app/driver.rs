use crate::app::buyers::Boy;
use crate::core::context::ApplicationContext;
use crate::domain::ports::Buy;
use crate::utils::error::Result;
use std::io::Write;

pub const BOY_LABEL: &str = "男孩买到了：";
pub const GIRL_LABEL: &str = "女孩买到了：";

/// Sample amounts passed to `buy_price`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DemoInputs {
    pub boy_price: f64,
    pub girl_price: f64,
}

impl Default for DemoInputs {
    fn default() -> Self {
        Self {
            boy_price: 35.0,
            girl_price: 99.8,
        }
    }
}

pub struct DemoDriver {
    context: ApplicationContext,
    inputs: DemoInputs,
}

impl DemoDriver {
    pub fn new(context: ApplicationContext, inputs: DemoInputs) -> Self {
        Self { context, inputs }
    }

    /// Resolve both buyers and collect the four purchase lines.
    pub fn run(&self) -> Result<Vec<String>> {
        // boy by name and type, girl by name only
        let boy = self.context.get_bean_as::<Boy>("boy")?;
        let girl = self.context.get_bean("girl")?;
        tracing::debug!("Resolved beans: {:?}", self.context.bean_names());

        let lines = vec![
            format!("{}{}", BOY_LABEL, boy.buy()),
            format!("{}{}", GIRL_LABEL, girl.buy()),
            format!("{}{}", BOY_LABEL, boy.buy_price(self.inputs.boy_price)),
            format!("{}{}", GIRL_LABEL, girl.buy_price(self.inputs.girl_price)),
        ];

        tracing::info!("Demo produced {} purchase line(s)", lines.len());
        Ok(lines)
    }

    pub fn run_to<W: Write>(&self, out: &mut W) -> Result<()> {
        for line in self.run()? {
            writeln!(out, "{}", line)?;
        }
        out.flush()?;
        Ok(())
    }
}

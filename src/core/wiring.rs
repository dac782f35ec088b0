// Component catalog: the explicit stand-in for classpath scanning.
// Adding a buyer means adding a row here.

use crate::app::buyers::{Boy, Girl};
use crate::core::context::ContextBuilder;
use crate::utils::error::{AopError, Result};

pub struct Component {
    pub name: &'static str,
    register: fn(ContextBuilder) -> ContextBuilder,
}

pub const COMPONENTS: &[Component] = &[
    Component {
        name: "boy",
        register: register_boy,
    },
    Component {
        name: "girl",
        register: register_girl,
    },
];

fn register_boy(builder: ContextBuilder) -> ContextBuilder {
    builder.register("boy", Boy)
}

fn register_girl(builder: ContextBuilder) -> ContextBuilder {
    builder.register("girl", Girl)
}

pub fn component_names() -> Vec<&'static str> {
    COMPONENTS.iter().map(|c| c.name).collect()
}

pub fn find_component(name: &str) -> Option<&'static Component> {
    COMPONENTS.iter().find(|c| c.name == name)
}

pub fn register_component(builder: ContextBuilder, name: &str) -> Result<ContextBuilder> {
    let component = find_component(name).ok_or_else(|| AopError::UnknownComponent {
        name: name.to_string(),
        known: component_names().join(", "),
    })?;
    tracing::debug!("🔍 Scanned component '{}'", component.name);
    Ok((component.register)(builder))
}

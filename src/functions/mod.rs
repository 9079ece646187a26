pub mod exp_log;
pub mod other;
pub mod rounding;
pub mod special;
pub mod trig;

use crate::registry::FunctionRegistry;

pub fn register_defaults(registry: &mut FunctionRegistry) {
    trig::register(registry);
    exp_log::register(registry);
    rounding::register(registry);
    special::register(registry);
    other::register(registry);
}

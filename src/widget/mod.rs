//! Widget system: the base widget, component traits, child lists.

pub mod base;
pub mod traits;

pub use base::Widget;
pub use traits::{
    find_component, find_component_mut, ChildContainer, ChildList, Component, Renderable,
};

/// Implements the accessor half of [`Component`] for a widget whose base
/// lives at the given field path.
macro_rules! component_accessors {
    ($($field:ident).+) => {
        fn widget(&self) -> &$crate::widget::Widget {
            &self.$($field).+
        }

        fn widget_mut(&mut self) -> &mut $crate::widget::Widget {
            &mut self.$($field).+
        }

        fn as_any(&self) -> &dyn ::std::any::Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn ::std::any::Any {
            self
        }
    };
}

pub(crate) use component_accessors;

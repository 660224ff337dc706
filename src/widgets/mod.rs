//! Built-in widgets: HTML tags, lists, buttons, links, panels, form inputs,
//! dropdowns and the responsive grid.

pub mod button;
pub mod check_input;
pub mod dropdown;
pub mod field_label;
pub mod grid;
pub mod link;
pub mod list;
pub mod panel;
pub mod select;
pub mod tag;
pub mod text_input;

pub use button::{Button, ButtonSize, ButtonStyle};
pub use check_input::{CheckInput, CheckInputType};
pub use dropdown::{DropDown, DropDownButton, DropDownList, DD};
pub use field_label::FieldLabel;
pub use grid::{GridSize, ResponsiveGridPanel};
pub use link::Link;
pub use list::{ListTag, ListType};
pub use panel::{
    FlexAlignContent, FlexAlignItems, FlexDir, FlexItem, FlexJustify, FlexPanel, FlexWrap, SimplePanel,
    WidgetWrapper,
};
pub use select::{SelectOptGroup, SelectOption};
pub use tag::{Align, Tag, TagType};
pub use text_input::{AbstractTextInput, InputSize, Text, TextInput, TextInputType};

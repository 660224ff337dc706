//! Bootstrap responsive grid panel.
//!
//! Children sit in a sparse row → column map. While no cell has ever been
//! given a size or an offset the grid is in auto mode: every column gets an
//! equal share of the 12 Bootstrap units and empty cells still render as
//! empty divs. Once any cell carries a size or offset, only filled cells
//! render, each with its own size.

use std::collections::BTreeMap;

use crate::ids::ComponentId;
use crate::property_enum;
use crate::reactive;
use crate::vdom::{VElement, VNode};
use crate::widget::{component_accessors, Component, Renderable, Widget};

use super::tag::Align;

/// Columns in a Bootstrap row.
pub const MAX_COLUMNS: usize = 12;

property_enum! {
    /// Bootstrap grid breakpoints.
    pub enum GridSize {
        Xs => "xs",
        Sm => "sm",
        Md => "md",
        Lg => "lg",
    }
}

#[derive(Debug)]
struct GridCell {
    child: Box<dyn Component>,
    size: usize,
    offset: usize,
}

/// A grid of rows and columns.
#[derive(Debug)]
pub struct ResponsiveGridPanel {
    widget: Widget,
    grid_size: GridSize,
    rows: usize,
    cols: usize,
    align: Option<Align>,
    cells: BTreeMap<usize, BTreeMap<usize, GridCell>>,
    auto: bool,
}

impl ResponsiveGridPanel {
    pub fn new(grid_size: GridSize) -> Self {
        Self::with_dimensions(grid_size, 0, 0)
    }

    /// A grid with a minimum number of rows and columns.
    pub fn with_dimensions(grid_size: GridSize, rows: usize, cols: usize) -> Self {
        Self {
            widget: Widget::new(),
            grid_size,
            rows,
            cols,
            align: None,
            cells: BTreeMap::new(),
            auto: true,
        }
    }

    pub fn with_align(mut self, align: Align) -> Self {
        self.set_align(Some(align));
        self
    }

    pub fn grid_size(&self) -> GridSize {
        self.grid_size
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether cells are sized automatically.
    pub fn is_auto(&self) -> bool {
        self.auto
    }

    pub fn align(&self) -> Option<Align> {
        self.align
    }

    pub fn set_align(&mut self, align: Option<Align>) -> &mut Self {
        self.align = align;
        self.widget.refresh();
        self
    }

    /// Put `child` at (`col`, `row`), replacing whatever was there. A size
    /// or offset above zero switches the grid out of auto mode for good.
    pub fn add_at(&mut self, child: impl Component, col: usize, row: usize, size: usize, offset: usize) -> &mut Self {
        self.add_boxed_at(Box::new(child), col, row, size, offset)
    }

    pub fn add_boxed_at(
        &mut self,
        child: Box<dyn Component>,
        col: usize,
        row: usize,
        size: usize,
        offset: usize,
    ) -> &mut Self {
        reactive::single_render(|| {
            self.rows = self.rows.max(row + 1);
            self.cols = self.cols.max(col + 1);
            self.cells
                .entry(row)
                .or_default()
                .insert(col, GridCell { child, size, offset });
            if size > 0 || offset > 0 {
                self.auto = false;
            }
            self.widget.refresh();
        });
        self
    }

    /// Append `child` in a new column of the first row.
    pub fn add(&mut self, child: impl Component) -> &mut Self {
        let col = self.cols;
        self.add_at(child, col, 0, 0, 0)
    }

    pub fn add_all(&mut self, children: impl IntoIterator<Item = Box<dyn Component>>) -> &mut Self {
        for child in children {
            let col = self.cols;
            self.add_boxed_at(child, col, 0, 0, 0);
        }
        self
    }

    /// Remove the child with the given id from every cell it occupies.
    pub fn remove(&mut self, id: ComponentId) -> Option<Box<dyn Component>> {
        let mut removed = None;
        for row in self.cells.values_mut() {
            let cols: Vec<usize> = row
                .iter()
                .filter(|(_, cell)| cell.child.id() == id)
                .map(|(col, _)| *col)
                .collect();
            for col in cols {
                removed = row.remove(&col).map(|cell| cell.child);
            }
        }
        if removed.is_some() {
            self.widget.refresh();
        }
        removed
    }

    /// Empty the cell at (`col`, `row`).
    pub fn remove_at(&mut self, col: usize, row: usize) -> Option<Box<dyn Component>> {
        let removed = self.cells.get_mut(&row)?.remove(&col).map(|cell| cell.child);
        self.widget.refresh();
        removed
    }

    /// The child at (`col`, `row`), if any.
    pub fn get(&self, col: usize, row: usize) -> Option<&dyn Component> {
        self.cells.get(&row)?.get(&col).map(|cell| &*cell.child)
    }

    /// Width in grid units of an auto-sized column.
    fn column_units(&self) -> usize {
        MAX_COLUMNS / self.cols.max(1)
    }

    fn cell_element(&self, units: usize, offset: usize) -> VElement {
        let gs = self.grid_size.css_name();
        let mut el = VElement::new("div").with_class(format!("col-{gs}-{units}"));
        if offset > 0 {
            el = el.with_class(format!("col-{gs}-offset-{offset}"));
        }
        if let Some(align) = self.align {
            el = el.with_class(align.css_name());
        }
        el
    }

    fn row_nodes(&self, row: usize) -> Vec<VNode> {
        let num = self.column_units();
        let Some(cells) = self.cells.get(&row) else {
            return Vec::new();
        };
        if self.auto {
            (0..self.cols)
                .map(|col| {
                    let el = self.cell_element(num, 0);
                    match cells.get(&col) {
                        Some(cell) => el.with_child(cell.child.render()).into(),
                        None => el.into(),
                    }
                })
                .collect()
        } else {
            cells
                .values()
                .map(|cell| {
                    let units = if cell.size > 0 { cell.size } else { num };
                    self.cell_element(units, cell.offset)
                        .with_child(cell.child.render())
                        .into()
                })
                .collect()
        }
    }
}

impl Renderable for ResponsiveGridPanel {
    fn render(&self) -> VNode {
        let rows = (0..self.rows).map(|row| {
            VNode::from(
                VElement::new("div")
                    .with_class("row")
                    .with_children(self.row_nodes(row)),
            )
        });
        self.element("div").with_children(rows).into()
    }

    fn sn_class(&self) -> Vec<(String, bool)> {
        self.widget.sn_class()
    }

    fn sn_attrs(&self) -> Vec<(String, String)> {
        self.widget.sn_attrs()
    }
}

impl Component for ResponsiveGridPanel {
    component_accessors!(widget);

    fn child_components(&self) -> Vec<&dyn Component> {
        self.cells
            .values()
            .flat_map(|row| row.values())
            .map(|cell| &*cell.child)
            .collect()
    }

    fn child_components_mut(&mut self) -> Vec<&mut dyn Component> {
        self.cells
            .values_mut()
            .flat_map(|row| row.values_mut())
            .map(|cell| &mut *cell.child as &mut dyn Component)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::tag::Tag;
    use pretty_assertions::assert_eq;

    #[test]
    fn auto_mode_fills_empty_cells() {
        let mut grid = ResponsiveGridPanel::new(GridSize::Md);
        grid.add_at(Tag::span("abc"), 0, 0, 0, 0);
        grid.add_at(Tag::span("def"), 2, 1, 0, 0);
        assert!(grid.is_auto());
        assert_eq!(
            grid.render().to_html(),
            concat!(
                "<div>",
                r#"<div class="row"><div class="col-md-4"><span>abc</span></div><div class="col-md-4"></div><div class="col-md-4"></div></div>"#,
                r#"<div class="row"><div class="col-md-4"></div><div class="col-md-4"></div><div class="col-md-4"><span>def</span></div></div>"#,
                "</div>"
            )
        );
    }

    #[test]
    fn sized_cells_leave_auto_mode() {
        let mut grid = ResponsiveGridPanel::new(GridSize::Sm).with_align(Align::Center);
        grid.add_at(Tag::span("a"), 0, 0, 6, 0);
        grid.add_at(Tag::span("b"), 1, 0, 0, 2);
        assert!(!grid.is_auto());
        assert_eq!(
            grid.render().to_html(),
            concat!(
                r#"<div><div class="row">"#,
                r#"<div class="col-sm-6 text-center"><span>a</span></div>"#,
                r#"<div class="col-sm-6 col-sm-offset-2 text-center"><span>b</span></div>"#,
                "</div></div>"
            )
        );
    }

    #[test]
    fn add_appends_columns_in_first_row() {
        let mut grid = ResponsiveGridPanel::new(GridSize::Xs);
        grid.add(Tag::span("1")).add(Tag::span("2"));
        assert_eq!((grid.rows(), grid.cols()), (1, 2));
        assert!(grid.get(1, 0).is_some());
        assert!(grid.render().to_html().contains(r#"<div class="col-xs-6"><span>2</span></div>"#));
    }

    #[test]
    fn remove_by_id_and_position() {
        let mut grid = ResponsiveGridPanel::new(GridSize::Md);
        let tag = Tag::span("x");
        let id = tag.id();
        grid.add(tag).add(Tag::span("y"));
        assert_eq!(grid.remove(id).map(|c| c.id()), Some(id));
        assert!(grid.get(0, 0).is_none());
        assert!(grid.remove_at(1, 0).is_some());
        assert!(grid.remove_at(5, 5).is_none());
        assert!(grid.child_components().is_empty());
    }

    #[test]
    fn empty_grid_renders_rows_without_cells() {
        let grid = ResponsiveGridPanel::with_dimensions(GridSize::Lg, 2, 0);
        assert_eq!(
            grid.render().to_html(),
            r#"<div><div class="row"></div><div class="row"></div></div>"#
        );
    }
}

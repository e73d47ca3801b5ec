use std::collections::BTreeMap;
use thiserror::Error;

/// Pixel rectangle inside a sprite sheet's bitmap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct SourceRect {
    pub(crate) x: u32,
    pub(crate) y: u32,
    pub(crate) w: u32,
    pub(crate) h: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum FrameRef {
    Cell(u32, u32),
    Named(&'static str),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum SpriteError {
    #[error("sprite sheet `{sheet}` has no frame named `{name}`")]
    UnknownName { sheet: &'static str, name: String },
    #[error("sprite sheet `{sheet}` has no cell ({col}, {row})")]
    OutOfRange {
        sheet: &'static str,
        col: u32,
        row: u32,
    },
}

/// Monochrome LCD bitmap. `true` is an ink pixel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Bitmap {
    pub(crate) w: u32,
    pub(crate) h: u32,
    px: Vec<bool>,
}

impl Bitmap {
    pub(crate) fn new(w: u32, h: u32) -> Self {
        Self {
            w,
            h,
            px: vec![false; (w as usize) * (h as usize)],
        }
    }

    fn idx(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.w as usize) + (x as usize)
    }

    pub(crate) fn get(&self, x: u32, y: u32) -> bool {
        x < self.w && y < self.h && self.px[self.idx(x, y)]
    }

    pub(crate) fn set(&mut self, x: u32, y: u32, on: bool) {
        if x < self.w && y < self.h {
            let i = self.idx(x, y);
            self.px[i] = on;
        }
    }

    pub(crate) fn fill(&mut self, on: bool) {
        self.px.fill(on);
    }

    #[cfg(test)]
    pub(crate) fn lit(&self) -> usize {
        self.px.iter().filter(|p| **p).count()
    }

    /// Stamps ascii art at `(x0, y0)`: `#` is ink, anything else is blank.
    fn stamp(&mut self, x0: u32, y0: u32, art: &[&str]) {
        for (dy, line) in art.iter().enumerate() {
            for (dx, ch) in line.chars().enumerate() {
                if ch == '#' {
                    self.set(x0 + dx as u32, y0 + dy as u32, true);
                }
            }
        }
    }
}

/// A grid of equally sized frames cut from one bitmap, with an optional
/// table of symbolic frame names.
#[derive(Clone, Debug)]
pub(crate) struct SpriteSheet {
    pub(crate) name: &'static str,
    bitmap: Bitmap,
    columns: u32,
    rows: u32,
    frame_w: u32,
    frame_h: u32,
    names: BTreeMap<&'static str, (u32, u32)>,
}

impl SpriteSheet {
    /// Builds a sheet from per-cell ascii art laid out row-major.
    pub(crate) fn from_cells(
        name: &'static str,
        frame_w: u32,
        frame_h: u32,
        columns: u32,
        rows: u32,
        cells: &[&[&str]],
    ) -> Self {
        let mut bitmap = Bitmap::new(frame_w * columns, frame_h * rows);
        for (i, art) in cells.iter().enumerate().take((columns * rows) as usize) {
            let col = i as u32 % columns;
            let row = i as u32 / columns;
            bitmap.stamp(col * frame_w, row * frame_h, art);
        }
        Self {
            name,
            bitmap,
            columns,
            rows,
            frame_w,
            frame_h,
            names: BTreeMap::new(),
        }
    }

    pub(crate) fn with_names(mut self, names: &[(&'static str, (u32, u32))]) -> Self {
        self.names.extend(names.iter().copied());
        self
    }

    pub(crate) fn bitmap(&self) -> &Bitmap {
        &self.bitmap
    }

    #[cfg(test)]
    pub(crate) fn width(&self) -> u32 {
        self.bitmap.w
    }

    #[cfg(test)]
    pub(crate) fn height(&self) -> u32 {
        self.bitmap.h
    }

    pub(crate) fn cell(&self, col: u32, row: u32) -> Result<SourceRect, SpriteError> {
        if col >= self.columns || row >= self.rows {
            return Err(SpriteError::OutOfRange {
                sheet: self.name,
                col,
                row,
            });
        }
        Ok(SourceRect {
            x: col * self.frame_w,
            y: row * self.frame_h,
            w: self.frame_w,
            h: self.frame_h,
        })
    }

    pub(crate) fn named(&self, name: &str) -> Result<SourceRect, SpriteError> {
        match self.names.get(name) {
            Some(&(col, row)) => self.cell(col, row),
            None => Err(SpriteError::UnknownName {
                sheet: self.name,
                name: name.to_string(),
            }),
        }
    }

    #[cfg(test)]
    pub(crate) fn name_of(&self, src: SourceRect) -> Option<&'static str> {
        self.names
            .iter()
            .find(|(_, cell)| self.cell(cell.0, cell.1) == Ok(src))
            .map(|(name, _)| *name)
    }

    pub(crate) fn resolve(&self, frame: FrameRef) -> Result<SourceRect, SpriteError> {
        match frame {
            FrameRef::Cell(col, row) => self.cell(col, row),
            FrameRef::Named(name) => self.named(name),
        }
    }
}

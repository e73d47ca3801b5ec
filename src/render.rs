use crate::config::Settings;
use crate::model::{Icon, Mode};
use crate::sim::Device;
use crate::sprite::{Bitmap, SourceRect, SpriteSheet};
use crossterm::{
    cursor,
    execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{
        self, BeginSynchronizedUpdate, Clear, ClearType, DisableLineWrap, EnableLineWrap,
        EndSynchronizedUpdate, EnterAlternateScreen, LeaveAlternateScreen,
    },
};
use std::io::{self, Write};

pub(crate) const LCD_W: u32 = 32;
pub(crate) const LCD_H: u32 = 16;

/// Where animation frames land. Drawing only ever clears, fills or blits.
pub(crate) trait Surface {
    fn clear(&mut self);
    fn fill(&mut self);
    fn draw_image(&mut self, sheet: &SpriteSheet, src: SourceRect, x: i32, y: i32);
}

/// The device screen: a small monochrome raster.
pub(crate) struct Lcd {
    pub(crate) bitmap: Bitmap,
}

impl Lcd {
    pub(crate) fn new() -> Self {
        Self {
            bitmap: Bitmap::new(LCD_W, LCD_H),
        }
    }
}

impl Surface for Lcd {
    fn clear(&mut self) {
        self.bitmap.fill(false);
    }

    fn fill(&mut self) {
        self.bitmap.fill(true);
    }

    // Ink pixels are stamped; blank sprite pixels leave the screen alone.
    fn draw_image(&mut self, sheet: &SpriteSheet, src: SourceRect, x: i32, y: i32) {
        let art = sheet.bitmap();
        for dy in 0..src.h {
            for dx in 0..src.w {
                if !art.get(src.x + dx, src.y + dy) {
                    continue;
                }
                let tx = x + dx as i32;
                let ty = y + dy as i32;
                if tx < 0 || ty < 0 {
                    continue;
                }
                self.bitmap.set(tx as u32, ty as u32, true);
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Cell {
    pub(crate) ch: char,
    pub(crate) fg: Color,
    pub(crate) bg: Color,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Color::White,
            bg: Color::Black,
        }
    }
}

pub(crate) struct CellBuffer {
    pub(crate) w: u16,
    pub(crate) h: u16,
    pub(crate) cells: Vec<Cell>,
}

impl CellBuffer {
    pub(crate) fn new(w: u16, h: u16) -> Self {
        Self {
            w,
            h,
            cells: vec![Cell::default(); (w as usize) * (h as usize)],
        }
    }
    pub(crate) fn idx(&self, x: u16, y: u16) -> usize {
        (y as usize) * (self.w as usize) + (x as usize)
    }
    pub(crate) fn set(&mut self, x: u16, y: u16, c: Cell) {
        if x < self.w && y < self.h {
            let i = self.idx(x, y);
            self.cells[i] = c;
        }
    }
    pub(crate) fn clear(&mut self, bg: Color) {
        for c in &mut self.cells {
            *c = Cell {
                bg,
                ..Cell::default()
            };
        }
    }
}

pub(crate) struct Terminal {
    pub(crate) out: io::Stdout,
    pub(crate) cols: u16,
    pub(crate) rows: u16,
    pub(crate) prev: CellBuffer,
    pub(crate) cur: CellBuffer,
}

impl Terminal {
    pub(crate) fn begin() -> anyhow::Result<Self> {
        let mut out = io::stdout();
        execute!(
            out,
            EnterAlternateScreen,
            cursor::Hide,
            DisableLineWrap,
            terminal::Clear(ClearType::All)
        )?;
        terminal::enable_raw_mode()?;

        let (cols, rows) = terminal::size()?;
        Ok(Self {
            out,
            cols,
            rows,
            prev: CellBuffer::new(cols, rows),
            cur: CellBuffer::new(cols, rows),
        })
    }

    pub(crate) fn end(&mut self) -> anyhow::Result<()> {
        queue!(
            self.out,
            BeginSynchronizedUpdate,
            ResetColor,
            Clear(ClearType::All),
            cursor::Show,
            EnableLineWrap,
            EndSynchronizedUpdate,
            LeaveAlternateScreen
        )?;
        self.out.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    pub(crate) fn resize_if_needed(&mut self) -> anyhow::Result<bool> {
        let (c, r) = terminal::size()?;
        if c == self.cols && r == self.rows {
            return Ok(false);
        }
        self.cols = c;
        self.rows = r;
        self.prev = CellBuffer::new(c, r);
        self.cur = CellBuffer::new(c, r);
        Ok(true)
    }

    pub(crate) fn present(&mut self, diff_only: bool) -> anyhow::Result<()> {
        queue!(self.out, BeginSynchronizedUpdate)?;

        let mut last_fg = None;
        let mut last_bg = None;

        for y in 0..self.rows {
            for x in 0..self.cols {
                let i = self.cur.idx(x, y);
                let c = self.cur.cells[i];
                if diff_only && c == self.prev.cells[i] {
                    continue;
                }

                queue!(self.out, cursor::MoveTo(x, y))?;

                if last_fg != Some(c.fg) {
                    queue!(self.out, SetForegroundColor(c.fg))?;
                    last_fg = Some(c.fg);
                }
                if last_bg != Some(c.bg) {
                    queue!(self.out, SetBackgroundColor(c.bg))?;
                    last_bg = Some(c.bg);
                }

                queue!(self.out, Print(c.ch))?;
            }
        }

        queue!(self.out, ResetColor, EndSynchronizedUpdate)?;
        self.out.flush()?;
        self.prev.cells.copy_from_slice(&self.cur.cells);
        Ok(())
    }
}

/* -----------------------------
   LCD -> terminal cells
------------------------------ */

#[derive(Clone, Copy)]
struct Palette {
    ink: Color,
    paper: Color,
    grid: Color,
    frame: Color,
    text: Color,
    active: Color,
    alert: Color,
}

impl Palette {
    fn new(enable_color: bool) -> Self {
        if enable_color {
            Self {
                ink: Color::Rgb { r: 28, g: 36, b: 28 },
                paper: Color::Rgb {
                    r: 158,
                    g: 178,
                    b: 126,
                },
                grid: Color::Rgb {
                    r: 140,
                    g: 160,
                    b: 110,
                },
                frame: Color::Rgb {
                    r: 220,
                    g: 120,
                    b: 150,
                },
                text: Color::White,
                active: Color::Yellow,
                alert: Color::Red,
            }
        } else {
            Self {
                ink: Color::White,
                paper: Color::Black,
                grid: Color::DarkGrey,
                frame: Color::White,
                text: Color::White,
                active: Color::White,
                alert: Color::White,
            }
        }
    }
}

/// Each LCD pixel becomes two terminal columns, so pixels stay square.
pub(crate) fn lcd_to_cells(
    lcd: &Bitmap,
    out: &mut CellBuffer,
    x0: u16,
    y0: u16,
    settings: &Settings,
) {
    let pal = Palette::new(settings.enable_color);
    for py in 0..lcd.h {
        for px in 0..lcd.w {
            let on = lcd.get(px, py);
            let (ch, fg) = match (on, settings.lcd_grid) {
                (true, _) => ('█', pal.ink),
                (false, true) => ('·', pal.grid),
                (false, false) => (' ', pal.ink),
            };
            let x = x0 + (px as u16) * 2;
            let y = y0 + py as u16;
            out.set(
                x,
                y,
                Cell {
                    ch,
                    fg,
                    bg: pal.paper,
                },
            );
            out.set(
                x + 1,
                y,
                Cell {
                    ch: if on { '█' } else { ' ' },
                    fg,
                    bg: pal.paper,
                },
            );
        }
    }
}

/* -----------------------------
   UI overlay (icon bars + help)
------------------------------ */

pub(crate) fn draw_text(buf: &mut CellBuffer, x: u16, y: u16, s: &str, fg: Color, bg: Color) {
    for (i, ch) in s.chars().enumerate() {
        let xx = x.saturating_add(i as u16);
        if xx >= buf.w || y >= buf.h {
            break;
        }
        buf.set(xx, y, Cell { ch, fg, bg });
    }
}

fn icon_bar(buf: &mut CellBuffer, x: u16, y: u16, icons: &[Icon], active: Icon, pal: Palette) {
    let mut xx = x;
    for icon in icons {
        let (text, fg) = if *icon == active {
            (format!("[{}]", icon.label()), pal.active)
        } else {
            (format!(" {} ", icon.label()), pal.text)
        };
        draw_text(buf, xx, y, &text, fg, Color::Black);
        xx = xx.saturating_add(text.chars().count() as u16 + 1);
    }
}

fn help_line(mode: Mode) -> &'static str {
    match mode {
        Mode::Egg => "Waiting to hatch...  q quit",
        Mode::Idle => "A next icon | B select | q quit",
        Mode::Food => "A meal/snack | B feed | C back",
        Mode::Game => "A guess left | B guess right | C back",
        Mode::Status => "A prev page | B next page | C back",
        Mode::Dead => "C start over | q quit",
        Mode::Sleep => "Sleeping...  q quit",
    }
}

/// Lays out the whole device: top icons, the LCD, bottom icons and help.
pub(crate) fn draw_device(buf: &mut CellBuffer, device: &Device<Lcd>, settings: &Settings) {
    let pal = Palette::new(settings.enable_color);
    buf.clear(Color::Black);

    let lcd_cols = (LCD_W as u16) * 2;
    let total_rows = LCD_H as u16 + 6;
    let x0 = buf.w.saturating_sub(lcd_cols) / 2;
    let y0 = buf.h.saturating_sub(total_rows) / 2;

    let active = device.active_icon();
    icon_bar(buf, x0, y0, &Icon::ALL[..4], active, pal);

    let border = "─".repeat(lcd_cols as usize);
    draw_text(buf, x0, y0 + 1, &border, pal.frame, Color::Black);
    if let Some(lcd) = device.surface() {
        lcd_to_cells(&lcd.bitmap, buf, x0, y0 + 2, settings);
    }
    let below = y0 + 2 + LCD_H as u16;
    draw_text(buf, x0, below, &border, pal.frame, Color::Black);

    icon_bar(buf, x0, below + 1, &Icon::ALL[4..], active, pal);
    if device.mode().is_live() && device.creature().needs_attention {
        draw_text(buf, x0 + lcd_cols - 3, below + 1, "(!)", pal.alert, Color::Black);
    }

    let mut status = format!("{:?}", device.mode());
    if device.mode() == Mode::Game {
        status.push_str(&format!("  round {}", device.game_round()));
    }
    if device.lights_off() {
        status.push_str("  lights off");
    }
    draw_text(buf, x0, below + 3, &status, pal.text, Color::Black);
    draw_text(
        buf,
        x0,
        buf.h.saturating_sub(1),
        help_line(device.mode()),
        pal.text,
        Color::Black,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{Atlas, SheetId};

    #[test]
    fn sprites_are_transparent_where_blank() {
        let atlas = Atlas::standard();
        let misc = atlas.sheet(SheetId::Misc);
        let mut lcd = Lcd::new();
        lcd.fill();
        let full = lcd.bitmap.lit();
        lcd.draw_image(misc, misc.named("ghost").unwrap(), 4, 4);
        assert_eq!(lcd.bitmap.lit(), full);

        lcd.clear();
        lcd.draw_image(misc, misc.named("ghost").unwrap(), 0, 0);
        let ghost = lcd.bitmap.lit();
        assert!(ghost > 0);
        // hanging off the top-left edge only loses what is off screen
        lcd.clear();
        lcd.draw_image(misc, misc.named("ghost").unwrap(), -4, -4);
        assert!(lcd.bitmap.lit() < ghost);
    }

    #[test]
    fn lcd_pixels_are_two_columns_wide() {
        let mut lcd = Bitmap::new(2, 1);
        lcd.set(1, 0, true);
        let mut buf = CellBuffer::new(4, 1);
        let settings = Settings {
            lcd_grid: false,
            ..Settings::default()
        };
        lcd_to_cells(&lcd, &mut buf, 0, 0, &settings);
        let chars: String = buf.cells.iter().map(|c| c.ch).collect();
        assert_eq!(chars, "  ██");
    }

    #[test]
    fn text_is_clipped_to_the_buffer() {
        let mut buf = CellBuffer::new(3, 1);
        draw_text(&mut buf, 1, 0, "abc", Color::White, Color::Black);
        let chars: String = buf.cells.iter().map(|c| c.ch).collect();
        assert_eq!(chars, " ab");
    }
}

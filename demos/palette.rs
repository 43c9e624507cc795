use std::{env,
          io::{BufWriter, Write},
          fs::File,
          error::Error};
use color_scale::{ScaleState, PaletteScale, RGBColor, DEFAULT_BASE};
use color_scale::wcag::{Rating, WCAG};

type Err = Box<dyn Error>;

fn css_color(c: impl RGBColor) -> String { c.to_hex() }

fn swatches(fh: &mut impl Write, scale: &PaletteScale) -> Result<(), Err> {
    writeln!(fh, "<table style=\"border: 0px;  border-spacing: 4px\">")?;
    for (label, c) in scale.iter() {
        writeln!(fh, "<tr style=\"background-color: {}; color: {}\">\
                      <td style=\"width: 60px; padding: 8px\"><b>{label}</b></td>\
                      <td style=\"padding: 8px\"><tt>{}</tt></td>\
                      <td style=\"padding: 8px\"><tt>{}</tt></td></tr>",
                 c.hex(), css_color(c.text_color().rgb()), c.hex(), c.css_rgb())?;
    }
    writeln!(fh, "</table>")?;
    Ok(())
}

fn playground(fh: &mut impl Write, scale: &PaletteScale,
              bg: u16, fg: u16) -> Result<(), Err> {
    let (Some(bg_c), Some(fg_c)) = (scale.get(bg), scale.get(fg)) else {
        writeln!(fh, "<p>No color at step {bg} or {fg}.</p>")?;
        return Ok(())
    };
    let ratio = bg_c.contrast_ratio(fg_c);
    let checks = WCAG.check(ratio);
    writeln!(fh, "<div style=\"background-color: {}; color: {}; \
                  padding: 16px; width: 400px\">\
                  <p style=\"font-size: 24pt\"><b>Large Text (18pt+)</b></p>\
                  <p>Normal Text (16pt)</p></div>",
             bg_c.hex(), fg_c.hex())?;
    writeln!(fh, "<p>Text {fg} on {bg}: contrast {ratio:.2}:1</p><ul>")?;
    for (name, level, pass) in
        [("AA Normal", WCAG.aa_normal, checks.aa_normal),
         ("AA Large", WCAG.aa_large, checks.aa_large),
         ("AAA Normal", WCAG.aaa_normal, checks.aaa_normal),
         ("AAA Large", WCAG.aaa_large, checks.aaa_large)] {
        writeln!(fh, "  <li>{name} (ratio ≥ {level}): {}</li>",
                 if pass { "pass" } else { "fail" })?;
    }
    writeln!(fh, "</ul>")?;
    Ok(())
}

fn grid(fh: &mut impl Write, scale: &PaletteScale) -> Result<(), Err> {
    let grid = scale.contrast_grid();
    writeln!(fh, "<table style=\"border-spacing: 2px; font-size: 9pt\">\
                  <tr><td></td>")?;
    for &l in grid.labels() {
        writeln!(fh, "  <td style=\"width: 40px; height: 20px; \
                      background-color: {}\"></td>", scale[l].hex())?;
    }
    writeln!(fh, "</tr>")?;
    for (l, row) in grid.rows() {
        writeln!(fh, "<tr><td style=\"width: 40px; \
                      background-color: {}\"></td>", scale[l].hex())?;
        for ratio in row {
            let (bg, text) = match ratio.map(|r| (WCAG.rate(r), r)) {
                None => ("#334155", "—".to_string()),
                Some((Rating::Aaa, r)) => ("#16a34a", format!("{r:.1}")),
                Some((Rating::Aa, r)) => ("#ca8a04", format!("{r:.1}")),
                Some((Rating::Fail, r)) => ("#dc2626", format!("{r:.1}")),
            };
            writeln!(fh, "  <td style=\"background-color: {bg}; color: white; \
                          text-align: center\">{text}</td>")?;
        }
        writeln!(fh, "</tr>")?;
    }
    writeln!(fh, "</table>\n\
                  <p>AAA (&ge;{}), AA (&ge;{}), Fail (&lt;{})</p>",
             WCAG.aaa_normal, WCAG.aa_normal, WCAG.aa_normal)?;
    Ok(())
}


fn main() -> Result<(), Err> {
    env_logger::init();
    let mut args = env::args().skip(1);
    let mut state = ScaleState::default();
    let base = args.next().unwrap_or_else(|| DEFAULT_BASE.to_string());
    if let Err(e) = state.regenerate(&base) {
        log::error!("Failed to generate palette: {e}");
    }
    let bg = args.next().and_then(|s| s.parse().ok()).unwrap_or(900);
    let fg = args.next().and_then(|s| s.parse().ok()).unwrap_or(100);

    let mut fh = BufWriter::new(File::create("palette.html")?);
    writeln!(fh, "<html>\n\
                  <head>\n\
                  <title>Color_scale: {}</title>\n\
                  </head>\n\
                  <body>", state.base())?;
    writeln!(fh, "<h3>Color Palette</h3>")?;
    swatches(&mut fh, state.scale())?;
    writeln!(fh, "<h3>Accessibility Playground</h3>")?;
    playground(&mut fh, state.scale(), bg, fg)?;
    writeln!(fh, "<h3>Contrast Grid</h3>\n\
                  <p>Contrast of text (top row) on a background \
                  (left column).</p>")?;
    grid(&mut fh, state.scale())?;
    writeln!(fh, "</body>\n\
                  </html>")?;
    log::info!("wrote palette.html for {}", state.base());
    Ok(())
}

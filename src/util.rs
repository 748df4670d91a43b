//! Small helpers shared by the generator, the evaluator and the report.

/// Round to a fixed number of decimals, the way sampled values are shown to students.
pub fn round_to(value: f64, decimals: u32) -> f64 {
  let factor = 10f64.powi(decimals as i32);
  (value * factor).round() / factor
}

/// Replace every `{key}` in the template with its value. Unknown keys stay as written.
pub fn fill_template<'a, I>(tpl: &str, pairs: I) -> String
where
  I: IntoIterator<Item = (&'a str, String)>,
{
  pairs.into_iter().fold(tpl.to_string(), |out, (k, v)| out.replace(&format!("{{{k}}}"), &v))
}

/// Trim and collapse inner runs of whitespace into single spaces.
pub fn normalize_whitespace(s: &str) -> String {
  s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Letter used to itemize the "SE PIDE" list: a, b, c…
pub fn item_letter(index: usize) -> String {
  match u8::try_from(index) {
    Ok(i) if i < 26 => char::from(b'a' + i).to_string(),
    _ => format!("{}", index + 1),
  }
}

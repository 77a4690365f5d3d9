//! Server-rendered prediction page
//!
//! Every control submits the form on change, so each interaction
//! re-renders the page with a fresh prediction.

use crate::form::{InputForm, WidgetKind, WidgetSpec};
use salarycast_core::Prediction;
use std::collections::HashMap;

/// What the output line under the form shows
#[derive(Debug, Clone)]
pub enum Outcome {
    Prediction(Prediction),
    Error(String),
}

/// Render the full page with the controls showing `values`
///
/// Widgets missing from `values` show their default.
pub fn render_page(form: &InputForm, values: &HashMap<String, String>, outcome: &Outcome) -> String {
    let mut controls = String::new();
    for widget in &form.widgets {
        let current = values
            .get(widget.name)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
            .unwrap_or(widget.default.as_str());
        controls.push_str(&render_widget(widget, current));
    }

    let output = match outcome {
        Outcome::Prediction(prediction) => format!(
            r#"<p class="prediction" id="prediction">{}</p>"#,
            escape(&prediction.display())
        ),
        Outcome::Error(message) => {
            format!(r#"<p class="error" id="error">{}</p>"#, escape(message))
        }
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <link rel="stylesheet" href="/static/style.css">
</head>
<body>
    <main>
        <h1>{title}</h1>
        <form id="salary-form" method="get" action="/">
{controls}            <noscript><button type="submit">Predict</button></noscript>
        </form>
        {output}
    </main>
</body>
</html>
"#,
        title = escape(form.title.trim_end()),
        controls = controls,
        output = output,
    )
}

fn render_widget(widget: &WidgetSpec, current: &str) -> String {
    let name = widget.name;
    let value = escape(current);

    let control = match &widget.kind {
        WidgetKind::Select { options } => {
            let options: String = options
                .iter()
                .map(|option| {
                    let selected = if option == current { " selected" } else { "" };
                    let option = escape(option);
                    format!(
                        "                    <option value=\"{option}\"{selected}>{option}</option>\n"
                    )
                })
                .collect();
            format!(
                "                <select id=\"{name}\" name=\"{name}\" onchange=\"this.form.submit()\">\n\
                 {options}                </select>\n"
            )
        }
        WidgetKind::Slider { min, max } => format!(
            "                <input type=\"range\" id=\"{name}\" name=\"{name}\" min=\"{min}\" max=\"{max}\" step=\"1\" value=\"{value}\" \
             oninput=\"this.nextElementSibling.value=this.value\" onchange=\"this.form.submit()\">\n\
             \x20               <output for=\"{name}\">{value}</output>\n"
        ),
        WidgetKind::Number { integer } => {
            let step = if *integer { "1" } else { "any" };
            format!(
                "                <input type=\"number\" id=\"{name}\" name=\"{name}\" step=\"{step}\" value=\"{value}\" onchange=\"this.form.submit()\">\n"
            )
        }
    };

    format!(
        "            <div class=\"field\">\n                <label for=\"{name}\">{label}</label>\n{control}            </div>\n",
        label = escape(widget.label),
    )
}

/// Minimal HTML escaping for text and attribute values
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{AGE, BALANCE, GEOGRAPHY, TENURE};

    fn form() -> InputForm {
        InputForm::from_vocabularies(
            &["France".into(), "Germany".into(), "Spain".into()],
            &["Female".into(), "Male".into()],
        )
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
    }

    #[test]
    fn test_page_marks_current_selection() {
        let form = form();
        let mut snapshot = form.default_snapshot().unwrap();
        snapshot.geography = "Germany".to_string();
        let values = form.snapshot_values(&snapshot);

        let html = render_page(&form, &values, &Outcome::Prediction(Prediction::new(1.0, 0)));
        assert!(html.contains(r#"<option value="Germany" selected>Germany</option>"#));
        assert!(html.contains(r#"<option value="France">France</option>"#));
        assert!(html.contains("<title>Customer Salary Prediction:</title>"));
        assert!(html.contains("Salary Prediction: 1.00"));
    }

    #[test]
    fn test_every_widget_auto_submits() {
        let form = form();
        let html = render_page(&form, &HashMap::new(), &Outcome::Error("oops".into()));
        assert_eq!(html.matches(r#"onchange="this.form.submit()""#).count(), form.widgets.len());
        assert_eq!(html.matches(r#"<div class="field">"#).count(), form.widgets.len());
        assert!(html.contains(r#"<p class="error" id="error">oops</p>"#));
    }

    #[test]
    fn test_controls_render_kind_specific_markup() {
        let form = form();
        let html = render_page(&form, &HashMap::new(), &Outcome::Error(String::new()));

        assert!(html.contains(
            r#"<input type="range" id="age" name="age" min="18" max="100" step="1" value="18""#
        ));
        assert!(html.contains(r#"<output for="age">18</output>"#));
        assert!(html.contains(r#"<input type="number" id="balance" name="balance" step="any" value="0.0""#));
        assert!(html.contains(r#"<input type="number" id="credit_score" name="credit_score" step="1" value="0""#));
        assert!(html.contains(r#"<label for="num_of_products">Number of Products</label>"#));
    }

    #[test]
    fn test_raw_values_are_echoed_and_escaped() {
        let form = form();
        let values: HashMap<String, String> = [
            (AGE, "101"),
            (BALANCE, "2500.5"),
            (TENURE, "\"><script>"),
            (GEOGRAPHY, "Spain"),
        ]
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let html = render_page(&form, &values, &Outcome::Error("bad".into()));
        assert!(html.contains(r#"value="101""#));
        assert!(html.contains(r#"value="2500.5""#));
        assert!(html.contains(r#"<option value="Spain" selected>Spain</option>"#));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&quot;&gt;&lt;script&gt;"));
    }
}

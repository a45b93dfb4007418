//! HTML pages for the input form and the forecast result

use shared::{Category, CropInfo, Crop, ForecastResult, Location};

const STYLE: &str = "body{font-family:sans-serif;max-width:52rem;margin:2rem auto;padding:0 1rem}\
label{display:block;margin-top:.75rem}\
table{border-collapse:collapse;margin:1rem 0}\
td,th{border:1px solid #ccc;padding:.35rem .75rem;text-align:left}\
td.price{text-align:right}\
section.selected{border-left:4px solid #2f7d32;padding-left:.75rem}";

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{}</title>\n<style>{}</style>\n</head>\n<body>\n{}</body>\n</html>\n",
        escape(title),
        STYLE,
        body
    )
}

fn options<C: Category>() -> String {
    C::ALL
        .iter()
        .map(|c| format!("<option value=\"{0}\">{0}</option>", escape(c.name())))
        .collect()
}

/// The input form, served for `GET /` and `GET /predict`
pub fn index_page() -> String {
    let body = format!(
        "<h1>Crop Price Forecast</h1>\n\
         <form method=\"post\" action=\"/predict\">\n\
         <label>Crop <select name=\"crop\" required>{crops}</select></label>\n\
         <label>Location <select name=\"location\" required>{locations}</select></label>\n\
         <label>Rainfall (mm) <input type=\"number\" step=\"any\" name=\"rainfall\" required></label>\n\
         <label>Temperature (&deg;C) <input type=\"number\" step=\"any\" name=\"temperature\" required></label>\n\
         <label>Humidity (%) <input type=\"number\" step=\"1\" name=\"humidity\" required></label>\n\
         <label>Current price <input type=\"number\" step=\"any\" name=\"price\" required></label>\n\
         <p><button type=\"submit\">Forecast</button></p>\n\
         </form>\n",
        crops = options::<Crop>(),
        locations = options::<Location>(),
    );
    layout("Crop Price Forecast", &body)
}

/// The forecast table followed by the crop descriptions
pub fn result_page(result: &ForecastResult, crop_info: &[CropInfo]) -> String {
    let mut body = String::new();

    body.push_str(&format!("<h1>Price forecast for {}</h1>\n", escape(&result.crop)));
    body.push_str("<table>\n<tr><th>Month</th><th>Predicted price</th></tr>\n");
    for point in &result.price_data {
        body.push_str(&format!(
            "<tr><td>{}</td><td class=\"price\">{:.2}</td></tr>\n",
            escape(&point.label),
            point.price
        ));
    }
    body.push_str("</table>\n<h2>About the crops</h2>\n");

    for info in crop_info {
        let class = if info.crop == result.crop { " class=\"selected\"" } else { "" };
        body.push_str(&format!(
            "<section{}><h3>{}</h3><p>{}</p></section>\n",
            class,
            escape(info.crop),
            escape(info.info)
        ));
    }
    body.push_str("<p><a href=\"/\">New forecast</a></p>\n");

    layout("Crop Price Forecast", &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use shared::{ForecastPoint, CROP_INFO};

    #[test]
    fn test_index_lists_every_choice() {
        let page = index_page();
        for crop in Crop::ALL {
            assert!(page.contains(&format!("<option value=\"{}\">", crop.name())));
        }
        for location in Location::ALL {
            assert!(page.contains(&format!("<option value=\"{}\">", location.name())));
        }
        assert!(page.contains("name=\"humidity\""));
    }

    #[test]
    fn test_result_renders_points_in_order() {
        let result = ForecastResult {
            crop: "Rice".to_string(),
            price_data: vec![
                ForecastPoint {
                    label: "October 2026".to_string(),
                    price: Decimal::new(123456, 2),
                },
                ForecastPoint {
                    label: "November 2026".to_string(),
                    price: Decimal::new(2000, 0),
                },
            ],
        };
        let page = result_page(&result, CROP_INFO);

        let october = page.find("October 2026").unwrap();
        let november = page.find("November 2026").unwrap();
        assert!(october < november);
        assert!(page.contains("1234.56"));
        assert!(page.contains("2000.00"));
        assert!(page.contains("<section class=\"selected\"><h3>Rice</h3>"));
        assert!(page.contains("Chili Capital of India"));
    }

    #[test]
    fn test_result_emits_one_row_per_point() {
        let result = ForecastResult {
            crop: "Maize".to_string(),
            price_data: vec![ForecastPoint {
                label: "March 2027".to_string(),
                price: Decimal::new(5, 1),
            }],
        };
        let page = result_page(&result, CROP_INFO);

        assert!(page.contains("<h1>Price forecast for Maize</h1>\n"));
        assert!(page.contains("<tr><td>March 2027</td><td class=\"price\">0.50</td></tr>\n"));
        assert_eq!(page.matches("<section").count(), CROP_INFO.len());
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("<a href=\"x\">&</a>"), "&lt;a href=&quot;x&quot;&gt;&amp;&lt;/a&gt;");
    }
}

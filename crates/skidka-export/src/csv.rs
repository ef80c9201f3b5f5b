//! CSV output format.

use skidka_types::PromoProduct;
use std::borrow::Cow;
use std::io::Write;

use crate::{ExportError, Formatter};

/// Column labels of the promo report, in output order.
pub const PROMO_COLUMNS: [&str; 6] = [
    "Продукт",
    "Старая цена",
    "Новая цена",
    "Процент скидки",
    "Время проведения акции",
    "Изображение",
];

/// CSV formatter.
#[derive(Debug, Clone, Default)]
pub struct CsvFormatter {
    /// Field delimiter (default: comma).
    delimiter: char,
    /// Whether to include the header row.
    include_header: bool,
}

impl CsvFormatter {
    /// Creates a new CSV formatter with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            delimiter: ',',
            include_header: true,
        }
    }

    /// Sets the field delimiter.
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets whether to include a header row.
    #[must_use]
    pub const fn with_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }

    /// Creates a tab-separated values (TSV) formatter.
    #[must_use]
    pub const fn tsv() -> Self {
        Self {
            delimiter: '\t',
            include_header: true,
        }
    }

    /// Quotes a field when it contains the delimiter, a quote, or a line
    /// break. Product names regularly contain commas.
    fn escape<'a>(&self, field: &'a str) -> Cow<'a, str> {
        if field.contains(self.delimiter)
            || field.contains('"')
            || field.contains('\n')
            || field.contains('\r')
        {
            Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
        } else {
            Cow::Borrowed(field)
        }
    }
}

impl Formatter for CsvFormatter {
    fn write_promos<W: Write + Send>(
        &self,
        products: &[PromoProduct],
        mut writer: W,
    ) -> Result<(), ExportError> {
        let d = self.delimiter;

        if self.include_header {
            let sep = d.to_string();
            writeln!(writer, "{}", PROMO_COLUMNS.join(sep.as_str()))?;
        }

        for product in products {
            writeln!(
                writer,
                "{}{d}{}{d}{}{d}{}{d}{}{d}{}",
                self.escape(&product.name),
                product.current_prices.regular_min,
                product.current_prices.promo_min,
                product.current_prices.discount_percent(),
                self.escape(&product.promo.date_range_label()),
                self.escape(&product.img_link),
            )?;
        }

        Ok(())
    }

    fn extension(&self) -> &str {
        "csv"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use skidka_types::{PricePair, PromoWindow};
    use std::io::Cursor;

    fn create_test_product(name: &str) -> PromoProduct {
        PromoProduct {
            id: 1,
            name: name.to_string(),
            mech: None,
            img_link: "https://photos.example/1.jpg".to_string(),
            plu: 100,
            promo: PromoWindow {
                id: 10,
                date_begin: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                date_end: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
                promo_type: "promo".to_string(),
                description: String::new(),
                kind: "normal".to_string(),
                expired_at: 0,
            },
            current_prices: PricePair {
                regular_min: 100.0,
                promo_min: 80.0,
            },
            store_name: "г.Москва".to_string(),
        }
    }

    #[test]
    fn test_csv_header_row() {
        let formatter = CsvFormatter::new();
        let products = vec![create_test_product("Хлеб")];
        let mut output = Cursor::new(Vec::new());

        formatter.write_promos(&products, &mut output).unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        let mut lines = result.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Продукт,Старая цена,Новая цена,Процент скидки,Время проведения акции,Изображение"
        );
        assert_eq!(
            lines.next().unwrap(),
            "Хлеб,100,80,20,01 March to 15 March,https://photos.example/1.jpg"
        );
    }

    #[test]
    fn test_csv_no_header() {
        let formatter = CsvFormatter::new().with_header(false);
        let products = vec![create_test_product("Хлеб")];
        let mut output = Cursor::new(Vec::new());

        formatter.write_promos(&products, &mut output).unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert!(!result.contains("Продукт,"));
    }

    #[test]
    fn test_csv_quotes_names_with_commas() {
        let formatter = CsvFormatter::new();
        let products = vec![create_test_product("Печенье, овсяное")];
        let mut output = Cursor::new(Vec::new());

        formatter.write_promos(&products, &mut output).unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert!(result.contains("\"Печенье, овсяное\","));
    }

    #[test]
    fn test_csv_row_order_preserved() {
        let formatter = CsvFormatter::new().with_header(false);
        let products = vec![
            create_test_product("первый"),
            create_test_product("второй"),
            create_test_product("третий"),
        ];
        let mut output = Cursor::new(Vec::new());

        formatter.write_promos(&products, &mut output).unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        let names: Vec<&str> = result
            .lines()
            .map(|l| l.split(',').next().unwrap())
            .collect();
        assert_eq!(names, ["первый", "второй", "третий"]);
    }

    #[test]
    fn test_tsv() {
        let formatter = CsvFormatter::tsv();
        let products = vec![create_test_product("Хлеб")];
        let mut output = Cursor::new(Vec::new());

        formatter.write_promos(&products, &mut output).unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert!(result.contains("Продукт\tСтарая цена"));
    }
}

//! Registry listing parser combining the field rules.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::ListingError;
use crate::models::config::PingjiaConfig;
use crate::models::listing::{MetaInfo, Parameters};

use super::rules::{
    areas::{
        extract_balcony_area, extract_canopy_area, extract_land_area, extract_main_building_area,
        sum_common_areas,
    },
    classifier::AreaClassifier,
    floors::{extract_building_age, extract_floors},
    meta::extract_meta,
    parking::extract_parking,
    parse_number,
    patterns::{LISTING_MARKER, TOTAL_PRICE},
    unit_price::{derive_unit_price, RAW_CURRENCY_THRESHOLD, TEN_THOUSAND},
};
use super::{ListingParser, Result};

/// Result of listing extraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Extracted parameters, ready for the calculator.
    pub data: Parameters,
    /// Descriptive fields for reporting.
    pub meta: MetaInfo,
    /// Fields that could not be found.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

/// Parser for the registry print page in any of its copied layouts.
#[derive(Debug, Clone, Default)]
pub struct RegistryListingParser {
    classifier: AreaClassifier,
}

impl RegistryListingParser {
    /// Create a parser with the default keyword tables.
    pub fn new() -> Self {
        Self {
            classifier: AreaClassifier::new(),
        }
    }

    /// Create a parser from configuration.
    pub fn from_config(config: &PingjiaConfig) -> Self {
        Self::new().with_classifier(AreaClassifier::from_config(&config.classifier))
    }

    /// Set the shared-area classifier.
    pub fn with_classifier(mut self, classifier: AreaClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    fn validate_input(&self, text: &str) -> Result<()> {
        if text.trim().is_empty() {
            return Err(ListingError::EmptyInput);
        }
        if !LISTING_MARKER.is_match(text) {
            return Err(ListingError::UnrecognizedFormat);
        }
        Ok(())
    }

    fn extract_total_price(&self, text: &str) -> Option<f64> {
        TOTAL_PRICE.captures(text).map(|caps| parse_number(&caps[1]))
    }
}

impl ListingParser for RegistryListingParser {
    fn parse(&self, text: &str) -> Result<ExtractionResult> {
        self.validate_input(text)?;

        info!("Parsing listing from {} characters of text", text.chars().count());

        let mut warnings = Vec::new();
        let mut data = Parameters::empty();

        let total_price = self.extract_total_price(text).unwrap_or_else(|| {
            warnings.push("Could not extract total price".to_string());
            0.0
        });

        let parking = extract_parking(text);
        data.parking_price = parking.price();
        data.parking_area = parking.area();

        match extract_floors(text) {
            Some(floors) => {
                data.current_floor = floors.current;
                data.floors = floors.total;
            }
            None => warnings.push("Could not extract floor information".to_string()),
        }

        data.building_age = extract_building_age(text).unwrap_or(0.0);

        data.main_building_area = extract_main_building_area(text);
        if data.main_building_area == 0.0 {
            warnings.push("Could not extract main building area".to_string());
        }
        data.balcony_area = extract_balcony_area(text);
        data.canopy_area = extract_canopy_area(text);

        let common = sum_common_areas(text, &self.classifier);
        data.common_area1 = common.parking_related;
        data.common_area2 = common.general;
        if common.entries == 0 {
            warnings.push("Could not extract shared areas".to_string());
        }

        data.land_area = extract_land_area(text);

        data.unit_price = derive_unit_price(&data, total_price);
        if data.parking_price >= RAW_CURRENCY_THRESHOLD {
            data.parking_price = (data.parking_price / TEN_THOUSAND).round();
        }

        let mut meta = extract_meta(text);
        meta.total_price_raw = total_price;

        debug!(
            "Extracted listing: building {:.2} ping, unit price {:.2}, {} warnings",
            data.main_building_area,
            data.unit_price,
            warnings.len()
        );

        Ok(ExtractionResult {
            data,
            meta,
            warnings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::config::ClassifierConfig;
    use pretty_assertions::assert_eq;

    const SAMPLE_LISTING: &str = "地段位置或門牌: 汐止區福德一路１７６巷００１５號四樓 社區名稱: 采采良品 交易標的: 房地(土地+建物)+車位 交易日期: 108/12/31 交易總價: 14,340,000 元 交易單價約: 320,565 (元/坪) 交易總面積: 50.51 坪 主建物佔比(%): 58.07% 交易棟筆數: 土地: 2 筆 建物: 1 棟(戶) 車位: 1 個 建物型態: 住宅大樓(11層含以上有電梯) 屋齡: 建物現況格局: 3房2廳2衛 主要用途: 住家用 車位交易總價: 144 樓別/樓高: 四層/十四層 管理組織: 有 有無電梯: 有 備註: 親友、員工、共有人或其他特殊關係間之交易;預售屋、或土地及建物分件登記案件; 交易明細 土地建物買賣 交易明細 土 地 資 料 土地區段位置 土地移轉面積 使用分區或編定 福德段270地號 6.79坪 持分移轉(10224/920000) 都市：第二種住宅區 福德段276地號 0.00坪 持分移轉(15/600000) 都市：第二種住宅區 建 物 資 料 屋齡 建物移轉面積 持分 主要用途 主要建材 建築完成年月 總樓層數 建物分層 0 0.01坪 共同使用部分，本共同使用部分項目有：防空避難室兼停車空間、水箱、電信、消防機房、無障礙梯安全梯、供行動不便者使用升降機、台電配電室、發電機房、排風管道、安全梯、無障礙廁所、管委會使用空間、梯廳、無障礙通路、雨遮、消防機房、電梯機房等１７項。 鋼筋混凝土構造 109/11 十一層 0 主建物0.02坪 持分移轉 店鋪 鋼筋混凝土構造 109/11 十一層 一層 0 主建物0.03坪 持分移轉 辦公室 鋼筋混凝土構造 111/10 十四層 一層 0 主建物23.32坪 全筆移轉 集合住宅 鋼筋混凝土構造 111/10 十四層 四層,陽台,雨遮 陽台3.08坪 雨遮0.47坪 0 2.62坪 共同使用部分，本共同使用部分項目有：防空避難室兼停車空間、車道、停車空間等３項。 鋼筋混凝土構造 111/10 十四層 0 6.65坪 共同使用部分，本共同使用部分項目有：防空避難室兼停車空間、車道、停車空間等３項。 鋼筋混凝土構造 111/10 十四層 0 0.02坪 共同使用部分，本共同使用部分項目有：行動不便者電梯、梯廳、無障礙安全梯、機房、水箱、垃圾車暫停空間、垃圾暫存室、電信機房、台電管道間、台電配電場所、停車空間、發電機房、緊急昇降機、排煙室、安全梯、管委會使用空間、公共服務空間、行動不便者樓梯、雨遮、消防機房、電梯機房等２１項。 鋼筋混凝土構造 111/10 十四層 0 14.28坪 共同使用部分，本共同使用部分項目有：行動不便者電梯、梯廳、無障礙安全梯、機房、水箱、垃圾車暫停空間、垃圾暫存室、電信機房、台電管道間、台電配電場所、停車空間、發電機房、緊急昇降機、排煙室、安全梯、管委會使用空間、公共服務空間、行動不便者樓梯、雨遮、消防機房、電梯機房等２１項。 鋼筋混凝土構造 111/10 十四層 車 位 資 料 車位類別 車位交易價格 車位面積 所在樓層 坡道平面 1,440,000元 10.26坪 地下四樓";

    const TAB_LISTING: &str = "地段位置或門牌:\t中山區民生東路一段\n\
社區名稱:\t民生華廈\n\
交易標的:\t房地(土地+建物)\n\
交易日期:\t112/03/15\n\
交易總價:\t12,000,000\t元\n\
交易單價約:\t400,000 (元/坪)\n\
建物型態:\t華廈(10層含以下有電梯)\n\
屋齡:\t28\n\
建物現況格局:\t2房1廳1衛\n\
主要用途:\t住家用\n\
樓別/樓高:\t五層/七層\n\
管理組織:\t有\n\
有無電梯:\t有\n\
備註:\t\n\
交易明細\n\
土\t地\t資\t料\n\
民生段100地號\t4.20坪\t持分移轉(120/10000)\n\
建\t物\t資\t料\n\
28\t主建物\t20.50坪\t全筆移轉\t集合住宅\t鋼筋混凝土構造\t84/06\t七層\t五層,陽台\n\
陽台\t2.00坪\n\
28\t7.50坪\t共同使用部分，本共同使用部分項目有：樓梯間、電梯、機房等３項。\t鋼筋混凝土構造\t84/06\t七層\n";

    const NO_DESCRIPTION_LISTING: &str = "交易總價: 8,000,000 元 樓別/樓高: 二層/五層 \
建 物 資 料 0 主建物15.00坪 全筆移轉 加強磚造 75/3 五層 0 3.00坪 共同使用部分 加強磚造 75/3 五層";

    #[test]
    fn test_parse_sample_listing() {
        let parser = RegistryListingParser::new();
        let result = parser.parse(SAMPLE_LISTING).unwrap();
        let data = result.data;

        assert_eq!(result.meta.total_price_raw, 14_340_000.0);
        assert_eq!(data.parking_price, 144.0);
        assert_eq!(data.current_floor, 4);
        assert_eq!(data.floors, 14);
        assert_eq!(data.main_building_area, 23.37);
        assert_eq!(data.balcony_area, 3.08);
        assert_eq!(data.canopy_area, 0.47);
        assert_eq!(data.common_area1, 9.27);
        assert_eq!(data.common_area2, 14.31);
        assert_eq!(data.parking_area, 10.26);
        assert_eq!(data.land_area, 6.79);
        assert_eq!(data.unit_price, 32.06);
        assert_eq!(data.floor_premium, 1.0);
        assert_eq!(data.age_premium, 1.0);
        assert_eq!(data.building_age, 0.0);
        assert!(result.warnings.is_empty(), "{:?}", result.warnings);
    }

    #[test]
    fn test_parse_sample_meta() {
        let result = RegistryListingParser::new().parse(SAMPLE_LISTING).unwrap();
        let meta = result.meta;

        assert_eq!(meta.address, "汐止區福德一路１７６巷００１５號四樓");
        assert_eq!(meta.community_name, "采采良品");
        assert_eq!(meta.transaction_target, "房地(土地+建物)+車位");
        assert_eq!(meta.transaction_date, "108/12/31");
        assert_eq!(meta.transaction_count, "土地: 2 筆 建物: 1 棟(戶) 車位: 1 個");
        assert_eq!(meta.unit_price_per_ping, 320_565.0);
        assert_eq!(meta.total_area, 50.51);
        assert_eq!(meta.main_building_ratio, "58.07%");
        assert_eq!(meta.building_type, "住宅大樓(11層含以上有電梯)");
        assert_eq!(meta.layout, "3房2廳2衛");
        assert_eq!(meta.main_usage, "住家用");
        assert_eq!(meta.management, "有");
        assert_eq!(meta.has_elevator, "有");
        assert_eq!(
            meta.note,
            "親友、員工、共有人或其他特殊關係間之交易;預售屋、或土地及建物分件登記案件;"
        );
        assert_eq!(meta.building_material, "鋼筋混凝土構造");
        assert_eq!(meta.completion_date, "111/10");
        assert_eq!(meta.parking_type, "坡道平面");
        assert_eq!(meta.parking_floor, "地下四樓");
    }

    #[test]
    fn test_parse_tab_delimited_listing() {
        let result = RegistryListingParser::new().parse(TAB_LISTING).unwrap();
        let data = result.data;

        assert_eq!(result.meta.total_price_raw, 12_000_000.0);
        assert_eq!(data.current_floor, 5);
        assert_eq!(data.floors, 7);
        assert_eq!(data.building_age, 28.0);
        assert_eq!(data.main_building_area, 20.5);
        assert_eq!(data.balcony_area, 2.0);
        assert_eq!(data.common_area1, 0.0);
        assert_eq!(data.common_area2, 7.5);
        assert_eq!(data.land_area, 4.2);
        assert_eq!(data.parking_price, 0.0);
        // 1200 / (20.5 + 2.0 + 7.5)
        assert_eq!(data.unit_price, 40.0);

        assert_eq!(result.meta.address, "中山區民生東路一段");
        assert_eq!(result.meta.community_name, "民生華廈");
        assert_eq!(result.meta.building_type, "華廈(10層含以下有電梯)");
        assert_eq!(result.meta.completion_date, "84/06");
        assert_eq!(result.meta.note, "");
    }

    #[test]
    fn test_parse_no_description_variant() {
        let result = RegistryListingParser::new()
            .parse(NO_DESCRIPTION_LISTING)
            .unwrap();

        assert_eq!(result.data.common_area1, 0.0);
        assert_eq!(result.data.common_area2, 3.0);
        assert_eq!(result.data.main_building_area, 15.0);
        assert_eq!(result.data.unit_price, 44.44);
        assert_eq!(result.meta.building_material, "加強磚造");
        assert_eq!(result.meta.completion_date, "75/3");
    }

    #[test]
    fn test_detail_parking_price_wins() {
        let text = "交易總價: 10,000,000 元 車位交易總價: 150 \
                    車 位 資 料 車位類別 車位交易價格 車位面積 所在樓層 坡道平面 2,000,000元 8.00坪 地下二樓";
        let result = RegistryListingParser::new().parse(text).unwrap();
        assert_eq!(result.data.parking_price, 200.0);
        assert_eq!(result.data.parking_area, 8.0);
    }

    #[test]
    fn test_summary_parking_price_fallback() {
        let text = "交易總價: 10,000,000 元 車位交易總價: 150 樓別/樓高: 三層/五層";
        let result = RegistryListingParser::new().parse(text).unwrap();
        assert_eq!(result.data.parking_price, 150.0);
        assert_eq!(result.data.parking_area, 0.0);
    }

    #[test]
    fn test_empty_input() {
        let parser = RegistryListingParser::new();
        assert_eq!(parser.parse(""), Err(ListingError::EmptyInput));
        assert_eq!(parser.parse("  \n\t "), Err(ListingError::EmptyInput));
    }

    #[test]
    fn test_unrecognized_format() {
        let parser = RegistryListingParser::new();
        assert_eq!(
            parser.parse("這是一段無關的文字"),
            Err(ListingError::UnrecognizedFormat)
        );
    }

    #[test]
    fn test_missing_fields_degrade_with_warnings() {
        let result = RegistryListingParser::new().parse("交易總價").unwrap();
        assert_eq!(result.data, Parameters::empty());
        assert_eq!(result.meta, MetaInfo::default());
        assert!(result
            .warnings
            .iter()
            .any(|w| w == "Could not extract total price"));
        assert!(result
            .warnings
            .iter()
            .any(|w| w == "Could not extract main building area"));
    }

    #[test]
    fn test_configured_classifier() {
        let config = PingjiaConfig {
            classifier: ClassifierConfig {
                general_keywords: Vec::new(),
                parking_keywords: vec!["停車空間".to_string()],
            },
            ..PingjiaConfig::default()
        };
        let result = RegistryListingParser::from_config(&config)
            .parse(SAMPLE_LISTING)
            .unwrap();

        // Without general keywords every entry mentioning a parking space is parking-related
        assert_eq!(result.data.common_area1, 23.58);
        assert_eq!(result.data.common_area2, 0.0);
    }
}

use crate::domain::common::{DataSource, VarietyCounts};
use crate::enums::{OrderOwner, OrderType, PaymentMethod};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Организационный контекст заказа (со стороны совета)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderContext {
    pub troop_id: Option<String>,
    pub service_unit: Option<String>,
    pub council: Option<String>,
    pub district: Option<String>,
}

/// Заказ покупателя (агрегат)
///
/// Идентичность - номер заказа. Создаётся при первом появлении номера в
/// любом источнике; последующие появления сливаются через merge-движок.
/// В течение прогона заказы не удаляются; реестр целиком пересоздаётся
/// при полном реимпорте.
///
/// Инвариант: `packages == physical_packages + donations`, где
/// `physical_packages` не включает виртуальный сорт Cookie Share.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Номер заказа (ключ реестра)
    pub order_number: String,
    /// Отображаемое имя продавца ("First Last"); пустое для безымянных
    pub scout_name: String,
    /// GIRL - индивидуальная продажа, TROOP - "site"-заказ отряда
    pub owner: OrderOwner,
    pub order_type: OrderType,
    /// Исходный код типа заказа из выгрузки
    pub order_type_raw: String,
    /// Все коробки, включая пожертвования
    pub packages: i32,
    /// Физические коробки (без Cookie Share)
    pub physical_packages: i32,
    /// Пожертвованные коробки (Cookie Share)
    pub donations: i32,
    pub amount: f64,
    pub payment_method: PaymentMethod,
    pub payment_method_raw: String,
    pub status: Option<String>,
    pub order_date: Option<NaiveDate>,
    /// Количества по сортам
    pub varieties: VarietyCounts,
    pub context: OrderContext,
    /// Источники, видевшие этот заказ (без дубликатов)
    pub sources: Vec<DataSource>,
    /// Сырые записи по источникам (для аудита), ключ - код источника
    pub raw_payloads: BTreeMap<String, serde_json::Value>,
}

impl Order {
    /// Новый заказ с нулевыми значениями и единственным источником
    pub fn new(order_number: impl Into<String>, source: DataSource) -> Self {
        Self {
            order_number: order_number.into(),
            scout_name: String::new(),
            owner: OrderOwner::Troop,
            order_type: OrderType::Unrecognized,
            order_type_raw: String::new(),
            packages: 0,
            physical_packages: 0,
            donations: 0,
            amount: 0.0,
            payment_method: PaymentMethod::Unrecognized,
            payment_method_raw: String::new(),
            status: None,
            order_date: None,
            varieties: VarietyCounts::new(),
            context: OrderContext::default(),
            sources: vec![source],
            raw_payloads: BTreeMap::new(),
        }
    }

    pub fn has_source(&self, source: DataSource) -> bool {
        self.sources.contains(&source)
    }

    /// Добавить источник в provenance, если его там ещё нет
    pub fn push_source(&mut self, source: DataSource) {
        if !self.has_source(source) {
            self.sources.push(source);
        }
    }

    pub fn set_raw_payload(&mut self, source: DataSource, payload: serde_json::Value) {
        self.raw_payloads.insert(source.code().to_string(), payload);
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.order_number.trim().is_empty() {
            return Err("Номер заказа обязателен".into());
        }
        if self.packages != self.physical_packages + self.donations {
            return Err(format!(
                "Нарушен инвариант коробок: {} != {} + {}",
                self.packages, self.physical_packages, self.donations
            ));
        }
        if self.sources.is_empty() {
            return Err("Заказ без источника".into());
        }
        Ok(())
    }
}

/// Частичные поля заказа от одного источника
///
/// Merge-движок применяет их либо целиком (поздний источник побеждает),
/// либо через enrichment-функцию источника, ограничивающую набор полей.
#[derive(Debug, Clone, Default)]
pub struct OrderPatch {
    pub scout_name: Option<String>,
    pub owner: Option<OrderOwner>,
    /// (типизированный код, исходная строка)
    pub order_type: Option<(OrderType, String)>,
    pub packages: Option<i32>,
    pub physical_packages: Option<i32>,
    pub donations: Option<i32>,
    pub amount: Option<f64>,
    pub payment_method: Option<(PaymentMethod, String)>,
    pub status: Option<String>,
    pub order_date: Option<NaiveDate>,
    pub varieties: Option<VarietyCounts>,
    pub troop_id: Option<String>,
    pub service_unit: Option<String>,
    pub council: Option<String>,
    pub district: Option<String>,
}

//! Financial - Account balances, transactions, investment portfolio

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Used when a financial request omits `user_id`.
pub const DEFAULT_USER_ID: &str = "user_001";

/// Account type → balance
pub type Balances = BTreeMap<String, f64>;

/// A single bank transaction (negative amounts are debits)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub date: NaiveDate,
    pub amount: f64,
    #[serde(rename = "desc")]
    pub description: String,
}

impl Transaction {
    pub fn new(date: NaiveDate, amount: f64, description: impl Into<String>) -> Self {
        Self {
            date,
            amount,
            description: description.into(),
        }
    }
}

/// Position in a single ticker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    pub shares: u32,
    pub current_price: f64,
}

impl Holding {
    pub fn new(shares: u32, current_price: f64) -> Self {
        Self {
            shares,
            current_price,
        }
    }

    pub fn value(&self) -> f64 {
        f64::from(self.shares) * self.current_price
    }
}

/// Investment portfolio as stored by the brokerage collaborator
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub stocks: BTreeMap<String, Holding>,
    pub bonds: f64,
}

impl Portfolio {
    /// Sum of every holding's value plus the bond amount
    pub fn total_value(&self) -> f64 {
        self.stocks.values().map(Holding::value).sum::<f64>() + self.bonds
    }

    pub fn summarize(self) -> PortfolioSummary {
        let total_value = self.total_value();
        PortfolioSummary {
            stocks: self.stocks,
            bonds: self.bonds,
            total_value,
        }
    }
}

/// Portfolio with its computed total
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    pub stocks: BTreeMap<String, Holding>,
    pub bonds: f64,
    pub total_value: f64,
}

/// The three merged financial lookups
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialSummary {
    pub balances: Balances,
    pub recent_transactions: Vec<Transaction>,
    pub investment_portfolio: PortfolioSummary,
}

/// Result payload of `POST /mcp/financial-summary`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialResult {
    pub summary: FinancialSummary,
    pub log_id: String,
}

use crate::domain::ports::Buy;

#[derive(Debug, Clone, Copy, Default)]
pub struct Girl;

impl Buy for Girl {
    fn buy(&self) -> String {
        "女孩买了一件漂亮的衣服".to_string()
    }

    fn buy_price(&self, price: f64) -> String {
        format!("女孩花了{}元买了一件漂亮的衣服", price)
    }
}

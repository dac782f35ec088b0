use crate::domain::ports::Buy;

#[derive(Debug, Clone, Copy, Default)]
pub struct Boy;

impl Buy for Boy {
    fn buy(&self) -> String {
        "男孩买了一个游戏机".to_string()
    }

    fn buy_price(&self, price: f64) -> String {
        format!("男孩花了{}元买了一个游戏机", price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buy_is_fixed() {
        assert_eq!(Boy.buy(), "男孩买了一个游戏机");
        assert_eq!(Boy.buy(), Boy.buy());
    }

    #[test]
    fn test_buy_price_embeds_amount() {
        assert_eq!(Boy.buy_price(35.0), "男孩花了35元买了一个游戏机");
        assert_eq!(Boy.buy_price(0.0), "男孩花了0元买了一个游戏机");
        assert_eq!(Boy.buy_price(-12.5), "男孩花了-12.5元买了一个游戏机");
    }
}

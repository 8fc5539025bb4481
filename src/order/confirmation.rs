use crate::order::form::PizzaSize;

/// "no toppings", "1 topping" or "{n} toppings".
pub fn topping_phrase(count: usize) -> String {
    match count {
        0 => "no toppings".to_string(),
        1 => "1 topping".to_string(),
        n => format!("{n} toppings"),
    }
}

pub fn size_phrase(size: PizzaSize) -> &'static str {
    match size {
        PizzaSize::Small => "small",
        PizzaSize::Medium => "medium",
        PizzaSize::Large => "large",
    }
}

/// Banner text shown after a successful order. The trailing space is part of
/// the message.
pub fn success_message(full_name: &str, size: PizzaSize, topping_count: usize) -> String {
    format!(
        "Thank you for your order, {full_name}! Your {} pizza with {} is on the way. ",
        size_phrase(size),
        topping_phrase(topping_count)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topping_phrase_pluralizes() {
        assert_eq!(topping_phrase(0), "no toppings");
        assert_eq!(topping_phrase(1), "1 topping");
        assert_eq!(topping_phrase(2), "2 toppings");
        assert_eq!(topping_phrase(5), "5 toppings");
    }

    #[test]
    fn message_keeps_trailing_space() {
        assert_eq!(
            success_message("Bob", PizzaSize::Small, 0),
            "Thank you for your order, Bob! Your small pizza with no toppings is on the way. "
        );
        assert_eq!(
            success_message("Cy", PizzaSize::Medium, 1),
            "Thank you for your order, Cy! Your medium pizza with 1 topping is on the way. "
        );
    }
}

// Property-based tests for the gerar-pix presence validation
//
// A request becomes an order exactly when name, email, cpf, phone, a non-zero
// amount and at least one item are all present.
//
// Uses proptest to cover every combination of missing and blank fields.

use proptest::prelude::*;

use pix_relay::orders::models::MISSING_ORDER_FIELDS_MESSAGE;
use pix_relay::orders::{GeneratePixRequest, Item};

/// How a single text field is supplied
#[derive(Debug, Clone)]
enum Text {
    Absent,
    Blank(String),
    Filled(String),
}

impl Text {
    fn into_option(self) -> Option<String> {
        match self {
            Text::Absent => None,
            Text::Blank(s) | Text::Filled(s) => Some(s),
        }
    }

    fn is_present(&self) -> bool {
        matches!(self, Text::Filled(_))
    }
}

fn text() -> impl Strategy<Value = Text> {
    prop_oneof![
        Just(Text::Absent),
        "[ \t]{0,3}".prop_map(Text::Blank),
        "[a-zA-Z0-9@.]{1,20}".prop_map(Text::Filled),
    ]
}

fn item() -> impl Strategy<Value = Item> {
    ("[a-zA-Z ]{1,12}", 1u32..10, 1i64..100_000).prop_map(|(title, quantity, unit_price)| Item {
        title,
        quantity,
        unit_price,
    })
}

proptest! {
    #[test]
    fn test_order_created_iff_all_fields_present(
        name in text(),
        email in text(),
        cpf in text(),
        phone in text(),
        amount in prop::option::of(0i64..1_000_000),
        items in prop::option::of(prop::collection::vec(item(), 0..4)),
    ) {
        let expected_valid = name.is_present()
            && email.is_present()
            && cpf.is_present()
            && phone.is_present()
            && amount.map_or(false, |a| a != 0)
            && items.as_ref().map_or(false, |i| !i.is_empty());

        let request = GeneratePixRequest {
            name: name.into_option(),
            email: email.into_option(),
            cpf: cpf.into_option(),
            phone: phone.into_option(),
            amount,
            items: items.clone(),
            tracking_parameters: None,
        };

        match request.into_order() {
            Ok(order) => {
                prop_assert!(expected_valid, "Accepted an incomplete request");
                prop_assert_eq!(Some(order.amount), amount);
                prop_assert_eq!(Some(order.items), items);
            }
            Err(err) => {
                prop_assert!(!expected_valid, "Rejected a complete request: {}", err);
                prop_assert_eq!(err.client_message(), MISSING_ORDER_FIELDS_MESSAGE);
            }
        }
    }
}

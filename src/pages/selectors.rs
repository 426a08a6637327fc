//! CSS selectors for the bestprice.vn flight pages.
//!
//! Page objects take a selector set at construction; `Default` gives the live
//! site's markup.

use crate::models::PassengerKind;

#[derive(Debug, Clone, Copy)]
pub struct StepperSelectors {
    pub plus: &'static str,
    pub minus: &'static str,
    /// Numeric input mirroring the stepper's value.
    pub value: &'static str,
}

#[derive(Debug, Clone)]
pub struct AirlineTicketSelectors {
    pub departure_point: &'static str,
    pub destination: &'static str,
    pub departure_date: &'static str,
    pub return_date: &'static str,
    pub passenger_popover: &'static str,
    pub adult: StepperSelectors,
    pub child: StepperSelectors,
    pub infant: StepperSelectors,
    pub search_button: &'static str,
}

impl AirlineTicketSelectors {
    pub fn stepper(&self, kind: PassengerKind) -> StepperSelectors {
        match kind {
            PassengerKind::Adult => self.adult,
            PassengerKind::Child => self.child,
            PassengerKind::Infant => self.infant,
        }
    }
}

impl Default for AirlineTicketSelectors {
    fn default() -> Self {
        Self {
            departure_point: "[data-id='flight_from']",
            destination: "[data-id='flight_to']",
            departure_date: "#departure_date_flight",
            return_date: "#returning_date_flight",
            passenger_popover: "#flight_passenger",
            adult: StepperSelectors {
                plus: ".popover-content .mktnd_btn_flight_adult_plus .ico-plus",
                minus: ".popover-content .mktnd_btn_flight_adult_minus .ico-minus",
                value: "input[name=\"ADT\"]",
            },
            child: StepperSelectors {
                plus: ".popover-content .mktnd_btn_children_adult_plus .ico-plus",
                minus: ".popover-content .mktnd_btn_children_minus .ico-minus",
                value: "input[name=\"CHD\"]",
            },
            infant: StepperSelectors {
                plus: ".popover-content .mktnd_btn_flight_infant_plus .ico-plus",
                minus: ".popover-content .mktnd_btn_flight_infant_minus .ico-minus",
                value: "input[name=\"INF\"]",
            },
            search_button: "#search_button",
        }
    }
}

#[derive(Debug, Clone)]
pub struct SearchResultSelectors {
    pub sort_dropdown: &'static str,
    pub sort_options: &'static str,
    pub departure_prices: &'static str,
    pub return_prices: &'static str,
}

impl Default for SearchResultSelectors {
    fn default() -> Self {
        Self {
            sort_dropdown: "#sort_by_flight_depart",
            sort_options: "#ul_bpv_sort_depart.bpv-s-content li",
            departure_prices: "#flight_content_depart strong span",
            return_prices: "#flight_data_content_return strong span",
        }
    }
}

//! Box office service enforcing the rules that span customers, shows, and sales.

use std::sync::Arc;

use chrono::NaiveDate;
use metrics::counter;
use rust_decimal::Decimal;
use tracing::{info, warn};

use super::report::OccupancyReport;
use crate::domain::entities::{
    Customer, DEFAULT_SHOW_CAPACITY, NewCustomer, NewShow, Sale, SaleRecord, Show,
};
use crate::domain::repositories::{CustomerRepository, SaleRepository, ShowRepository};
use crate::error::{TicketError, TicketResult};

/// Maximum number of shows that may be scheduled on one calendar date.
pub const MAX_SHOWS_PER_DATE: usize = 2;

/// Pricing and capacity settings fixed when the service is constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoxOfficeSettings {
    /// Price of a single ticket.
    pub unit_price: Decimal,
    /// Capacity given to every newly scheduled show.
    pub show_capacity: u32,
}

impl Default for BoxOfficeSettings {
    fn default() -> Self {
        Self {
            unit_price: Decimal::new(5000, 2),
            show_capacity: DEFAULT_SHOW_CAPACITY,
        }
    }
}

/// Service for registering customers, scheduling shows, and selling tickets.
///
/// Enforces:
/// - One customer per national ID
/// - At most two shows per date, each with a distinct time slot
/// - Quantity and capacity checks before a sale reaches the store
pub struct BoxOfficeService<C: CustomerRepository, S: ShowRepository, V: SaleRepository> {
    customers: Arc<C>,
    shows: Arc<S>,
    sales: Arc<V>,
    settings: BoxOfficeSettings,
}

impl<C: CustomerRepository, S: ShowRepository, V: SaleRepository> BoxOfficeService<C, S, V> {
    /// Creates a new box office service.
    pub fn new(
        customers: Arc<C>,
        shows: Arc<S>,
        sales: Arc<V>,
        settings: BoxOfficeSettings,
    ) -> Self {
        Self {
            customers,
            shows,
            sales,
            settings,
        }
    }

    /// Price charged per ticket.
    pub fn unit_price(&self) -> Decimal {
        self.settings.unit_price
    }

    /// Registers a new customer.
    ///
    /// # Errors
    ///
    /// Returns [`TicketError::DuplicateCustomer`] carrying the existing
    /// customer's ID if the national ID is already registered. No second
    /// record is created.
    pub fn register_customer(&self, new_customer: NewCustomer) -> TicketResult<Customer> {
        if let Some(existing) = self.customers.find_by_national_id(&new_customer.national_id) {
            return Err(self.rejected(TicketError::DuplicateCustomer {
                national_id: new_customer.national_id,
                existing_id: existing.id,
            }));
        }

        let customer = self.customers.create(new_customer);
        info!(customer_id = customer.id, "Customer registered");
        Ok(customer)
    }

    /// Looks up a customer by national ID.
    pub fn find_customer_by_national_id(&self, national_id: &str) -> Option<Customer> {
        self.customers.find_by_national_id(national_id)
    }

    /// Schedules a show on `date` at `time_slot` with the configured capacity.
    ///
    /// # Errors
    ///
    /// Returns [`TicketError::TooManyShowsThisDate`] if two shows already exist
    /// on `date`, regardless of their slots.
    /// Returns [`TicketError::DuplicateTimeSlot`] if a show on `date` already
    /// uses `time_slot`.
    pub fn schedule_show(
        &self,
        date: NaiveDate,
        time_slot: impl Into<String>,
    ) -> TicketResult<Show> {
        let time_slot = time_slot.into();
        let shows_on_date = self.shows.find_by_date(date);

        if shows_on_date.len() >= MAX_SHOWS_PER_DATE {
            return Err(self.rejected(TicketError::TooManyShowsThisDate { date }));
        }

        if shows_on_date.iter().any(|show| show.time_slot == time_slot) {
            return Err(self.rejected(TicketError::DuplicateTimeSlot { date, time_slot }));
        }

        let show = self.shows.create(NewShow {
            date,
            time_slot,
            capacity: self.settings.show_capacity,
        });
        info!(
            show_id = show.id,
            date = %show.date,
            time_slot = %show.time_slot,
            capacity = show.capacity,
            "Show scheduled"
        );
        Ok(show)
    }

    /// Sells `quantity` tickets for a show to a registered customer.
    ///
    /// Checks run in order: customer, show, quantity, capacity. The sale is
    /// priced at `quantity * unit_price` and the show's availability drops by
    /// `quantity` in the same store operation that records the sale.
    ///
    /// # Errors
    ///
    /// Returns [`TicketError::CustomerNotFound`] or [`TicketError::ShowNotFound`]
    /// if an ID does not resolve.
    /// Returns [`TicketError::InvalidQuantity`] if `quantity <= 0`.
    /// Returns [`TicketError::InsufficientCapacity`] if the show has fewer than
    /// `quantity` tickets left.
    pub fn sell_tickets(
        &self,
        customer_id: i64,
        show_id: i64,
        quantity: i64,
    ) -> TicketResult<Sale> {
        self.try_sell(customer_id, show_id, quantity).map_err(|e| {
            counter!("circus_sales_rejected_total", "code" => e.code()).increment(1);
            self.rejected(e)
        })
    }

    fn try_sell(&self, customer_id: i64, show_id: i64, quantity: i64) -> TicketResult<Sale> {
        let customer = self.customers.find_by_id(customer_id)?;
        let show = self.shows.find_by_id(show_id)?;

        if quantity <= 0 {
            return Err(TicketError::InvalidQuantity { quantity });
        }

        let available = show.available_count();
        if i64::from(available) < quantity {
            return Err(TicketError::InsufficientCapacity {
                requested: quantity,
                available,
            });
        }

        let sale = self
            .sales
            .create(&customer, &show, quantity, self.settings.unit_price)?;

        counter!("circus_sales_total").increment(1);
        counter!("circus_tickets_sold_total").increment(u64::from(sale.quantity));
        info!(
            sale_id = sale.id,
            customer_id,
            show_id,
            quantity = sale.quantity,
            total = %sale.total_price,
            "Tickets sold"
        );
        Ok(sale)
    }

    /// Lists all shows ordered by date, then time slot.
    pub fn list_shows(&self) -> Vec<Show> {
        self.shows.list()
    }

    /// Lists all registered customers.
    pub fn list_customers(&self) -> Vec<Customer> {
        self.customers.list()
    }

    /// Lists all sales ordered by sale time.
    pub fn list_sales(&self) -> Vec<Sale> {
        self.sales.list()
    }

    /// Lists all sales joined with the current state of their customer and show.
    ///
    /// Sales whose customer or show cannot be resolved are skipped.
    pub fn list_sale_records(&self) -> Vec<SaleRecord> {
        self.sales
            .list()
            .into_iter()
            .filter_map(|sale| {
                let customer = self.customers.find_by_id(sale.customer_id).ok()?;
                let show = self.shows.find_by_id(sale.show_id).ok()?;
                Some(SaleRecord {
                    sale,
                    customer,
                    show,
                })
            })
            .collect()
    }

    /// Builds the occupancy report for `date` from the live show counters.
    pub fn daily_occupancy(&self, date: NaiveDate) -> OccupancyReport {
        OccupancyReport::new(date, &self.shows.find_by_date(date))
    }

    /// Renders the daily occupancy report for `date` as text.
    pub fn generate_daily_report(&self, date: NaiveDate) -> String {
        self.daily_occupancy(date).to_string()
    }

    fn rejected(&self, err: TicketError) -> TicketError {
        warn!(code = err.code(), "{}", err);
        err
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::{
        MockCustomerRepository, MockSaleRepository, MockShowRepository,
    };
    use chrono::Utc;
    use metrics_util::debugging::{DebugValue, DebuggingRecorder, Snapshotter};

    type TestService =
        BoxOfficeService<MockCustomerRepository, MockShowRepository, MockSaleRepository>;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    fn create_test_customer(id: i64, national_id: &str) -> Customer {
        Customer::new(
            id,
            NewCustomer::new("Ana", "ana@example.com", "5551234", national_id),
        )
    }

    fn create_test_show(id: i64, slot: &str, sold: i64) -> Show {
        let mut show = Show::new(
            id,
            NewShow {
                date: date(),
                time_slot: slot.to_string(),
                capacity: DEFAULT_SHOW_CAPACITY,
            },
        );
        if sold > 0 {
            show.sell(sold).unwrap();
        }
        show
    }

    fn service(
        customers: MockCustomerRepository,
        shows: MockShowRepository,
        sales: MockSaleRepository,
    ) -> TestService {
        BoxOfficeService::new(
            Arc::new(customers),
            Arc::new(shows),
            Arc::new(sales),
            BoxOfficeSettings::default(),
        )
    }

    #[test]
    fn test_register_customer_success() {
        let mut customers = MockCustomerRepository::new();
        customers
            .expect_find_by_national_id()
            .withf(|national_id| national_id == "123")
            .times(1)
            .returning(|_| None);
        customers
            .expect_create()
            .times(1)
            .returning(|new_customer| Customer::new(1, new_customer));

        let service = service(customers, MockShowRepository::new(), MockSaleRepository::new());

        let customer = service
            .register_customer(NewCustomer::new("Ana", "ana@example.com", "5551234", "123"))
            .unwrap();

        assert_eq!(customer.id, 1);
        assert_eq!(customer.national_id, "123");
    }

    #[test]
    fn test_register_customer_duplicate_does_not_create() {
        let mut customers = MockCustomerRepository::new();
        let existing = create_test_customer(4, "123");
        customers
            .expect_find_by_national_id()
            .times(1)
            .returning(move |_| Some(existing.clone()));
        customers.expect_create().never();

        let service = service(customers, MockShowRepository::new(), MockSaleRepository::new());

        let result = service.register_customer(NewCustomer::new("Bia", "", "", "123"));

        assert_eq!(
            result,
            Err(TicketError::DuplicateCustomer {
                national_id: "123".to_string(),
                existing_id: 4,
            })
        );
    }

    #[test]
    fn test_schedule_show_uses_configured_capacity() {
        let mut shows = MockShowRepository::new();
        shows.expect_find_by_date().times(1).returning(|_| vec![]);
        shows
            .expect_create()
            .withf(|new_show| new_show.capacity == 200 && new_show.time_slot == "15:00")
            .times(1)
            .returning(|new_show| Show::new(1, new_show));

        let service = service(MockCustomerRepository::new(), shows, MockSaleRepository::new());

        let show = service.schedule_show(date(), "15:00").unwrap();

        assert_eq!(show.capacity, 200);
        assert_eq!(show.tickets_sold, 0);
    }

    #[test]
    fn test_schedule_third_show_rejected() {
        let mut shows = MockShowRepository::new();
        shows.expect_find_by_date().times(1).returning(|_| {
            vec![
                create_test_show(1, "15:00", 0),
                create_test_show(2, "20:00", 0),
            ]
        });
        shows.expect_create().never();

        let service = service(MockCustomerRepository::new(), shows, MockSaleRepository::new());

        let result = service.schedule_show(date(), "15:00");

        assert_eq!(result, Err(TicketError::TooManyShowsThisDate { date: date() }));
    }

    #[test]
    fn test_schedule_duplicate_slot_rejected() {
        let mut shows = MockShowRepository::new();
        shows
            .expect_find_by_date()
            .times(1)
            .returning(|_| vec![create_test_show(1, "15:00", 0)]);
        shows.expect_create().never();

        let service = service(MockCustomerRepository::new(), shows, MockSaleRepository::new());

        let result = service.schedule_show(date(), "15:00");

        assert!(matches!(
            result,
            Err(TicketError::DuplicateTimeSlot { ref time_slot, .. }) if time_slot == "15:00"
        ));
    }

    #[test]
    fn test_sell_tickets_unknown_customer() {
        let mut customers = MockCustomerRepository::new();
        customers
            .expect_find_by_id()
            .times(1)
            .returning(|id| Err(TicketError::CustomerNotFound { id }));

        let mut sales = MockSaleRepository::new();
        sales.expect_create().never();

        let service = service(customers, MockShowRepository::new(), sales);

        let result = service.sell_tickets(9, 1, 1);

        assert_eq!(result, Err(TicketError::CustomerNotFound { id: 9 }));
    }

    #[test]
    fn test_sell_tickets_unknown_show() {
        let mut customers = MockCustomerRepository::new();
        customers
            .expect_find_by_id()
            .returning(|id| Ok(create_test_customer(id, "123")));

        let mut shows = MockShowRepository::new();
        shows
            .expect_find_by_id()
            .times(1)
            .returning(|id| Err(TicketError::ShowNotFound { id }));

        let mut sales = MockSaleRepository::new();
        sales.expect_create().never();

        let service = service(customers, shows, sales);

        let result = service.sell_tickets(1, 42, 1);

        assert_eq!(result, Err(TicketError::ShowNotFound { id: 42 }));
    }

    #[test]
    fn test_sell_tickets_quantity_checked_before_capacity() {
        let mut customers = MockCustomerRepository::new();
        customers
            .expect_find_by_id()
            .returning(|id| Ok(create_test_customer(id, "123")));

        // A full show: a capacity check would fail too, but quantity wins.
        let mut shows = MockShowRepository::new();
        shows
            .expect_find_by_id()
            .returning(|id| Ok(create_test_show(id, "15:00", 200)));

        let mut sales = MockSaleRepository::new();
        sales.expect_create().never();

        let service = service(customers, shows, sales);

        assert_eq!(
            service.sell_tickets(1, 1, 0),
            Err(TicketError::InvalidQuantity { quantity: 0 })
        );
        assert_eq!(
            service.sell_tickets(1, 1, -5),
            Err(TicketError::InvalidQuantity { quantity: -5 })
        );
    }

    #[test]
    fn test_sell_tickets_insufficient_capacity() {
        let mut customers = MockCustomerRepository::new();
        customers
            .expect_find_by_id()
            .returning(|id| Ok(create_test_customer(id, "123")));

        let mut shows = MockShowRepository::new();
        shows
            .expect_find_by_id()
            .returning(|id| Ok(create_test_show(id, "15:00", 195)));

        let mut sales = MockSaleRepository::new();
        sales.expect_create().never();

        let service = service(customers, shows, sales);

        let err = service.sell_tickets(1, 1, 6).unwrap_err();

        assert_eq!(
            err,
            TicketError::InsufficientCapacity {
                requested: 6,
                available: 5
            }
        );
        assert!(err.to_string().contains("6 requested, 5 available"));
    }

    #[test]
    fn test_sell_tickets_prices_with_unit_price() {
        let mut customers = MockCustomerRepository::new();
        customers
            .expect_find_by_id()
            .returning(|id| Ok(create_test_customer(id, "123")));

        let mut shows = MockShowRepository::new();
        shows
            .expect_find_by_id()
            .returning(|id| Ok(create_test_show(id, "15:00", 0)));

        let mut sales = MockSaleRepository::new();
        sales
            .expect_create()
            .withf(|customer, show, quantity, unit_price| {
                customer.id == 1
                    && show.id == 2
                    && *quantity == 3
                    && *unit_price == Decimal::new(5000, 2)
            })
            .times(1)
            .returning(|customer, show, _, unit_price| {
                Ok(Sale::new(1, customer.id, show.id, 3, unit_price, Utc::now()))
            });

        let service = service(customers, shows, sales);

        let sale = service.sell_tickets(1, 2, 3).unwrap();

        assert_eq!(sale.quantity, 3);
        assert_eq!(sale.total_price, Decimal::new(15000, 2));
    }

    #[test]
    fn test_generate_daily_report_without_shows() {
        let mut shows = MockShowRepository::new();
        shows.expect_find_by_date().times(1).returning(|_| vec![]);

        let service = service(MockCustomerRepository::new(), shows, MockSaleRepository::new());

        assert_eq!(
            service.generate_daily_report(date()),
            "No shows scheduled for 01/06/2025"
        );
    }

    #[test]
    fn test_list_sale_records_skips_unresolved() {
        let mut customers = MockCustomerRepository::new();
        customers.expect_find_by_id().returning(|id| {
            if id == 1 {
                Ok(create_test_customer(1, "123"))
            } else {
                Err(TicketError::CustomerNotFound { id })
            }
        });

        let mut shows = MockShowRepository::new();
        shows
            .expect_find_by_id()
            .returning(|id| Ok(create_test_show(id, "15:00", 10)));

        let mut sales = MockSaleRepository::new();
        sales.expect_list().times(1).returning(|| {
            vec![
                Sale::new(1, 1, 1, 10, Decimal::new(5000, 2), Utc::now()),
                Sale::new(2, 7, 1, 1, Decimal::new(5000, 2), Utc::now()),
            ]
        });

        let service = service(customers, shows, sales);

        let records = service.list_sale_records();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].customer.id, 1);
        assert_eq!(records[0].show.tickets_sold, 10);
    }

    fn sales_rejected(snapshotter: &Snapshotter) -> Vec<(String, u64)> {
        snapshotter
            .snapshot()
            .into_vec()
            .into_iter()
            .filter(|(key, ..)| key.key().name() == "circus_sales_rejected_total")
            .filter_map(|(key, _, _, value)| {
                let code = key
                    .key()
                    .labels()
                    .find(|label| label.key() == "code")?
                    .value()
                    .to_string();
                match value {
                    DebugValue::Counter(count) => Some((code, count)),
                    _ => None,
                }
            })
            .collect()
    }

    #[test]
    fn test_duplicate_registration_is_not_a_sale_rejection() {
        let mut customers = MockCustomerRepository::new();
        let existing = create_test_customer(4, "123");
        customers
            .expect_find_by_national_id()
            .returning(move |_| Some(existing.clone()));

        let mut shows = MockShowRepository::new();
        shows.expect_find_by_date().returning(|_| {
            vec![
                create_test_show(1, "15:00", 0),
                create_test_show(2, "20:00", 0),
            ]
        });

        let service = service(customers, shows, MockSaleRepository::new());
        let recorder = DebuggingRecorder::new();
        let snapshotter = recorder.snapshotter();

        metrics::with_local_recorder(&recorder, || {
            assert!(service.register_customer(NewCustomer::new("Bia", "", "", "123")).is_err());
            assert!(service.schedule_show(date(), "22:00").is_err());
        });

        assert!(sales_rejected(&snapshotter).is_empty());
    }

    #[test]
    fn test_sale_rejection_is_counted_by_code() {
        let mut customers = MockCustomerRepository::new();
        customers
            .expect_find_by_id()
            .returning(|id| Ok(create_test_customer(id, "123")));

        let mut shows = MockShowRepository::new();
        shows
            .expect_find_by_id()
            .returning(|id| Ok(create_test_show(id, "15:00", 0)));

        let mut sales = MockSaleRepository::new();
        sales.expect_create().never();

        let service = service(customers, shows, sales);
        let recorder = DebuggingRecorder::new();
        let snapshotter = recorder.snapshotter();

        metrics::with_local_recorder(&recorder, || {
            assert!(service.sell_tickets(1, 1, 0).is_err());
        });

        assert_eq!(
            sales_rejected(&snapshotter),
            vec![("invalid_quantity".to_string(), 1)]
        );
    }
}

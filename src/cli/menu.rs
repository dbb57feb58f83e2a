//! Interactive text menu.
//!
//! Every domain or input error is printed and the loop continues; only a
//! terminal I/O failure ends the session.

use anyhow::Result;
use chrono::{Local, NaiveDate};
use colored::*;
use dialoguer::{Input, Select};
use serde::Serialize;
use std::fmt::Display;

use super::OutputFormat;
use super::input::{parse_date, parse_id, parse_quantity};
use super::render;
use crate::bootstrap::AppService;
use crate::domain::entities::{Customer, NewCustomer};

/// Menu entries, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    RegisterCustomer,
    SellTickets,
    ScheduleShow,
    ListShows,
    ListCustomers,
    ListSales,
    DailyReport,
    Exit,
}

impl MenuAction {
    const ALL: [MenuAction; 8] = [
        MenuAction::RegisterCustomer,
        MenuAction::SellTickets,
        MenuAction::ScheduleShow,
        MenuAction::ListShows,
        MenuAction::ListCustomers,
        MenuAction::ListSales,
        MenuAction::DailyReport,
        MenuAction::Exit,
    ];

    fn label(self) -> &'static str {
        match self {
            MenuAction::RegisterCustomer => "Register customer",
            MenuAction::SellTickets => "Sell tickets",
            MenuAction::ScheduleShow => "Schedule show",
            MenuAction::ListShows => "List shows",
            MenuAction::ListCustomers => "List customers",
            MenuAction::ListSales => "List sales",
            MenuAction::DailyReport => "Daily occupancy report",
            MenuAction::Exit => "Exit",
        }
    }
}

/// Runs the menu loop until the user picks "Exit".
///
/// # Errors
///
/// Returns an error only if the terminal cannot be read or written.
pub fn run(service: &AppService, output: OutputFormat) -> Result<()> {
    let labels: Vec<&str> = MenuAction::ALL.iter().map(|a| a.label()).collect();

    loop {
        println!();
        println!("{}", "==== CIRCUS TICKET OFFICE ====".bright_blue().bold());

        let choice = Select::new()
            .with_prompt("Choose an option")
            .items(&labels)
            .default(0)
            .interact()?;

        match MenuAction::ALL[choice] {
            MenuAction::RegisterCustomer => register_customer(service)?,
            MenuAction::SellTickets => sell_tickets(service)?,
            MenuAction::ScheduleShow => schedule_show(service)?,
            MenuAction::ListShows => list_shows(service, output)?,
            MenuAction::ListCustomers => list_customers(service, output)?,
            MenuAction::ListSales => list_sales(service, output)?,
            MenuAction::DailyReport => daily_report(service, output)?,
            MenuAction::Exit => {
                println!("{}", "Closing the box office. Goodbye!".bright_white());
                return Ok(());
            }
        }
    }
}

fn header(title: &str) {
    println!();
    println!("{}", format!("==== {title} ====").bright_blue().bold());
}

fn print_error(context: &str, err: impl Display) {
    println!("{} {}", format!("{context}:").red().bold(), err);
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn prompt(label: &str) -> Result<String> {
    Ok(Input::<String>::new().with_prompt(label).interact_text()?)
}

fn prompt_optional(label: &str) -> Result<String> {
    Ok(Input::<String>::new()
        .with_prompt(label)
        .allow_empty(true)
        .interact_text()?)
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Prompts for contact details and registers a customer under `national_id`.
fn prompt_and_register(service: &AppService, national_id: String) -> Result<Option<Customer>> {
    let name = prompt("Name")?;
    let email = prompt("Email")?;
    let phone = prompt("Phone")?;

    match service.register_customer(NewCustomer::new(name, email, phone, national_id)) {
        Ok(customer) => Ok(Some(customer)),
        Err(e) => {
            print_error("Failed to register customer", e);
            Ok(None)
        }
    }
}

fn register_customer(service: &AppService) -> Result<()> {
    header("REGISTER CUSTOMER");

    let national_id = prompt("CPF")?;
    if let Some(customer) = prompt_and_register(service, national_id)? {
        println!(
            "{} ID: {}",
            "Customer registered!".green().bold(),
            customer.id.to_string().bright_white()
        );
    }

    Ok(())
}

fn sell_tickets(service: &AppService) -> Result<()> {
    header("SELL TICKETS");

    let shows = service.list_shows();
    if shows.is_empty() {
        println!("{}", "No shows scheduled".yellow());
        return Ok(());
    }

    println!("{}", "Shows:".bright_white().bold());
    for show in &shows {
        println!("  {}", render::available_show_line(show));
    }
    println!();

    let show_id = match parse_id("show ID", &prompt("Show ID")?) {
        Ok(id) => id,
        Err(e) => {
            print_error("Invalid input", e);
            return Ok(());
        }
    };

    let national_id = prompt("Customer CPF")?;
    let customer = match service.find_customer_by_national_id(&national_id) {
        Some(customer) => {
            println!("  Customer: {}", customer.name.cyan());
            customer
        }
        None => {
            println!("{}", "Customer not found, registering:".yellow());
            match prompt_and_register(service, national_id)? {
                Some(customer) => customer,
                None => return Ok(()),
            }
        }
    };

    let quantity = match parse_quantity(&prompt("Number of tickets")?) {
        Ok(quantity) => quantity,
        Err(e) => {
            print_error("Invalid input", e);
            return Ok(());
        }
    };

    match service.sell_tickets(customer.id, show_id, quantity) {
        Ok(sale) => println!("{}", render::receipt(&sale).green().bold()),
        Err(e) => print_error("Sale failed", e),
    }

    Ok(())
}

fn schedule_show(service: &AppService) -> Result<()> {
    header("SCHEDULE SHOW");

    let date = match parse_date(&prompt_optional("Date (DD/MM/YYYY) or ENTER for today")?, today())
    {
        Ok(date) => date,
        Err(e) => {
            print_error("Invalid input", e);
            return Ok(());
        }
    };
    let time_slot = prompt("Time slot (e.g. 15:00)")?;

    match service.schedule_show(date, time_slot) {
        Ok(show) => println!(
            "{} {}",
            "Show scheduled!".green().bold(),
            render::show_line(&show)
        ),
        Err(e) => print_error("Failed to schedule show", e),
    }

    Ok(())
}

fn list_shows(service: &AppService, output: OutputFormat) -> Result<()> {
    let shows = service.list_shows();
    if output == OutputFormat::Json {
        return print_json(&shows);
    }

    header("SHOWS");
    if shows.is_empty() {
        println!("{}", "  No shows scheduled".yellow());
        return Ok(());
    }

    for show in &shows {
        println!("  {}", render::show_line(show));
    }
    println!();
    println!("  Total: {}", shows.len().to_string().bright_white().bold());

    Ok(())
}

fn list_customers(service: &AppService, output: OutputFormat) -> Result<()> {
    let customers = service.list_customers();
    if output == OutputFormat::Json {
        return print_json(&customers);
    }

    header("CUSTOMERS");
    if customers.is_empty() {
        println!("{}", "  No customers registered".yellow());
        return Ok(());
    }

    for customer in &customers {
        println!("  {}", render::customer_line(customer));
    }
    println!();
    println!(
        "  Total: {}",
        customers.len().to_string().bright_white().bold()
    );

    Ok(())
}

fn list_sales(service: &AppService, output: OutputFormat) -> Result<()> {
    let records = service.list_sale_records();
    if output == OutputFormat::Json {
        return print_json(&records);
    }

    header("SALES");
    if records.is_empty() {
        println!("{}", "  No sales yet".yellow());
        return Ok(());
    }

    for record in &records {
        println!("  {}", render::sale_line(record));
    }
    println!();
    println!("  Total: {}", records.len().to_string().bright_white().bold());

    Ok(())
}

fn daily_report(service: &AppService, output: OutputFormat) -> Result<()> {
    let date = match parse_date(&prompt_optional("Date (DD/MM/YYYY) or ENTER for today")?, today())
    {
        Ok(date) => date,
        Err(e) => {
            print_error("Invalid input", e);
            return Ok(());
        }
    };

    if output == OutputFormat::Json {
        return print_json(&service.daily_occupancy(date));
    }

    header("DAILY REPORT");
    println!("{}", service.generate_daily_report(date));

    Ok(())
}

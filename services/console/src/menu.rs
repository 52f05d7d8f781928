//! Interactive operator shell: menu loop, retry-until-valid prompts, and
//! table rendering. All raw-input validation happens here; the desk only
//! receives typed values.

use std::fmt::Write as _;
use std::io::{self, BufRead, Write};

use maintdesk::config::AppConfig;
use maintdesk::desk::{
    Category, FileSink, Location, MaintenanceDesk, Priority, RequestId, RequestRow, RequestStatus,
    TechnicianId, TechnicianView,
};
use maintdesk::error::AppError;

pub(crate) fn run(mut desk: MaintenanceDesk, config: &AppConfig) -> Result<(), AppError> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!();
        println!("========== MAIN MENU ==========");
        println!("1. Log new request");
        println!("2. List requests");
        println!("3. Assign technician");
        println!("4. Update status");
        println!("5. Search technician");
        println!("6. Save new requests in file");
        println!("7. Exit");
        println!("===============================");

        let Some(choice) = prompt_int(&mut lines, "Enter your choice: ", 7)? else {
            return Ok(());
        };
        println!();

        match choice {
            1 => log_request(&mut desk, &mut lines)?,
            2 => list_requests(&desk, &mut lines)?,
            3 => assign_technician(&mut desk, &mut lines)?,
            4 => update_status(&mut desk, &mut lines)?,
            5 => technician_details(&desk, &mut lines)?,
            6 => export_pending(&desk, config),
            _ => {
                println!("Exiting...");
                return Ok(());
            }
        }
    }
}

/// Read integers until one lands in 1..=max. `None` means the input stream
/// ended, which the caller treats as exit.
fn prompt_int<I>(lines: &mut I, prompt: &str, max: u16) -> Result<Option<u16>, AppError>
where
    I: Iterator<Item = io::Result<String>>,
{
    loop {
        print!("{prompt}");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            return Ok(None);
        };
        match line?.trim().parse::<u16>() {
            Ok(value) if value >= 1 && value <= max => return Ok(Some(value)),
            Ok(_) => println!("Input out of range (1-{max}). Try again."),
            Err(_) => println!("Invalid input (not a number). Try again."),
        }
    }
}

fn location_from_choice(choice: u16) -> Location {
    match choice {
        1 => Location::Ly5,
        2 => Location::Ly6,
        _ => Location::Ly7,
    }
}

fn category_from_choice(choice: u16) -> Category {
    match choice {
        1 => Category::Electricity,
        2 => Category::Plumbing,
        _ => Category::Ac,
    }
}

fn status_from_choice(choice: u16) -> RequestStatus {
    match choice {
        1 => RequestStatus::Assigned,
        2 => RequestStatus::Done,
        _ => RequestStatus::New,
    }
}

fn log_request<I>(desk: &mut MaintenanceDesk, lines: &mut I) -> Result<(), AppError>
where
    I: Iterator<Item = io::Result<String>>,
{
    println!("=== CREATE NEW REQUEST ===");
    let capacity = desk.requests().capacity();

    let id = loop {
        let Some(id) = prompt_int(
            lines,
            &format!("Enter the Request ID (1-{capacity}): "),
            capacity,
        )?
        else {
            return Ok(());
        };
        if desk.requests().get(RequestId(id)).is_ok() {
            println!("ID already exists. Try another.");
        } else {
            break RequestId(id);
        }
    };

    println!();
    println!("Select your dormitory:");
    println!("1. LY5");
    println!("2. LY6");
    println!("3. LY7");
    let Some(choice) = prompt_int(lines, "Enter your choice (1-3): ", 3)? else {
        return Ok(());
    };
    let location = location_from_choice(choice);

    println!();
    println!("Select request category:");
    println!("1. Electricity");
    println!("2. Plumbing");
    println!("3. AC");
    let Some(choice) = prompt_int(lines, "Enter your choice (1-3): ", 3)? else {
        return Ok(());
    };
    let category = category_from_choice(choice);

    println!();
    let Some(rank) = prompt_int(
        lines,
        "How urgent is your request? (1 - Low ... 5 - High): ",
        u16::from(Priority::MAX),
    )?
    else {
        return Ok(());
    };
    let priority = Priority::new(rank as u8).expect("prompt bounded by Priority::MAX");

    match desk.create_request(id, location, category, priority) {
        Ok(_) => println!("\n[Success] Request created!"),
        Err(err) => println!("{err}"),
    }
    Ok(())
}

fn list_requests<I>(desk: &MaintenanceDesk, lines: &mut I) -> Result<(), AppError>
where
    I: Iterator<Item = io::Result<String>>,
{
    let Some(choice) = prompt_int(lines, "List ALL (1) / NEW only (2) / by category (3): ", 3)?
    else {
        return Ok(());
    };

    let requests = match choice {
        1 => desk.requests().list_all(),
        2 => desk.requests().list_by_status(RequestStatus::New),
        _ => {
            println!("Which category?:");
            println!("1. Electricity");
            println!("2. Plumbing");
            println!("3. AC");
            let Some(choice) = prompt_int(lines, "Enter your choice: ", 3)? else {
                return Ok(());
            };
            desk.requests().list_by_category(category_from_choice(choice))
        }
    };

    let rows: Vec<RequestRow> = requests.into_iter().map(RequestRow::from).collect();
    if rows.is_empty() {
        // found-zero outcome, not a failure
        println!("No match is found");
    } else {
        print!("{}", render_table(&rows));
    }
    Ok(())
}

fn assign_technician<I>(desk: &mut MaintenanceDesk, lines: &mut I) -> Result<(), AppError>
where
    I: Iterator<Item = io::Result<String>>,
{
    println!("--- Current Requests ---");
    let rows: Vec<RequestRow> = desk.requests().list_all().iter().map(|r| RequestRow::from(*r)).collect();
    print!("{}", render_table(&rows));

    let capacity = desk.requests().capacity();
    let Some(request_id) = prompt_int(
        lines,
        "\nEnter the Request ID from the table above: ",
        capacity,
    )?
    else {
        return Ok(());
    };

    println!("\nAvailable Technicians:");
    for technician in desk.technicians().list_all() {
        let view = TechnicianView::from(technician);
        println!("{}. {} - {}", view.id, view.name, view.specialty);
    }
    let Some(technician_id) = prompt_int(lines, "Enter Technician ID to assign: ", capacity)?
    else {
        return Ok(());
    };
    println!();

    let request_id = RequestId(request_id);
    let technician_id = TechnicianId(technician_id);
    match desk.assign(request_id, technician_id) {
        Ok(()) => {
            let name = desk
                .technicians()
                .get(technician_id)
                .map(|technician| technician.name.clone())
                .unwrap_or_default();
            println!("[Success] Technician {name} is assigned to Request {request_id}.");
            println!("Request status updated to 'ASSIGNED'.");
        }
        Err(err) => println!("{err}"),
    }
    Ok(())
}

fn update_status<I>(desk: &mut MaintenanceDesk, lines: &mut I) -> Result<(), AppError>
where
    I: Iterator<Item = io::Result<String>>,
{
    println!("--- Current Requests ---");
    let rows: Vec<RequestRow> = desk.requests().list_all().iter().map(|r| RequestRow::from(*r)).collect();
    print!("{}", render_table(&rows));

    let capacity = desk.requests().capacity();
    let Some(id) = prompt_int(lines, "\nSelect Request ID to update: ", capacity)? else {
        return Ok(());
    };

    println!("Input new status:");
    println!("1. ASSIGNED");
    println!("2. DONE");
    println!("3. NEW");
    let Some(choice) = prompt_int(lines, "Enter your choice: ", 3)? else {
        return Ok(());
    };

    match desk.update_status(RequestId(id), status_from_choice(choice)) {
        Ok(status) => println!("[Updated] Status changed to {status}"),
        Err(err) => println!("{err}"),
    }
    Ok(())
}

fn technician_details<I>(desk: &MaintenanceDesk, lines: &mut I) -> Result<(), AppError>
where
    I: Iterator<Item = io::Result<String>>,
{
    let capacity = desk.requests().capacity();
    let Some(id) = prompt_int(lines, "Enter Technician ID: ", capacity)? else {
        return Ok(());
    };

    match desk.technicians().get(TechnicianId(id)) {
        Ok(technician) => {
            let view = TechnicianView::from(technician);
            println!();
            println!("==== TECHNICIAN DETAILS ====");
            println!("ID: {}", view.id);
            println!("Name: {}", view.name);
            println!("Specialization: {}", view.specialty);
            println!("============================");
        }
        Err(err) => println!("{err}"),
    }
    Ok(())
}

fn export_pending(desk: &MaintenanceDesk, config: &AppConfig) {
    let sink = FileSink::new(&config.desk.export_path);
    match desk.export_pending(&sink) {
        Ok(count) => println!(
            "Exported {count} 'NEW' requests to '{}'.",
            config.desk.export_path.display()
        ),
        Err(err) => println!("{err}"),
    }
}

/// Render rows the way the operator sees them: a rule, a header, one line per
/// request, and a closing rule. Unassigned requests show `-` for the
/// technician column.
pub(crate) fn render_table(rows: &[RequestRow]) -> String {
    const RULE: &str =
        "------------------------------------------------------------------";

    let mut table = String::new();
    let _ = writeln!(table, "{RULE}");
    let _ = writeln!(
        table,
        "| {:<5} | {:<8} | {:<11} | {:<8} | {:<10} | {:<7} |",
        "ID", "Location", "Category", "Priority", "Status", "Tech ID"
    );
    let _ = writeln!(table, "{RULE}");
    for row in rows {
        let technician = row
            .technician
            .map(|id| id.to_string())
            .unwrap_or_else(|| "-".to_string());
        let _ = writeln!(
            table,
            "| {:<5} | {:<8} | {:<11} | {:<8} | {:<10} | {:<7} |",
            row.id, row.location, row.category, row.priority, row.status, technician
        );
    }
    let _ = writeln!(table, "{RULE}");
    table
}

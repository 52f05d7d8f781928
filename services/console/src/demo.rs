//! Scripted end-to-end walkthrough of the desk: log requests, assign by
//! specialty, complete one, and export the pending snapshot.

use maintdesk::config::AppConfig;
use maintdesk::desk::{
    Category, FileSink, Location, MaintenanceDesk, Priority, RequestId, RequestRow, RequestStatus,
    TechnicianId,
};
use maintdesk::error::AppError;

use crate::menu::render_table;

pub(crate) fn run(mut desk: MaintenanceDesk, config: &AppConfig) -> Result<(), AppError> {
    println!("Maintenance desk demo");
    println!("Roster:");
    for technician in desk.technicians().list_all() {
        println!(
            "- {} {} ({})",
            technician.id, technician.name, technician.specialty
        );
    }

    let plumbing = log(&mut desk, 5, Location::Ly6, Category::Plumbing, 3)?;
    let electric = log(&mut desk, 7, Location::Ly5, Category::Electricity, 2)?;
    log(&mut desk, 9, Location::Ly7, Category::Ac, 5)?;

    println!("\nAssigning Omar (Plumbing) to request {plumbing}");
    desk.assign(plumbing, TechnicianId(2))?;

    println!("Trying Omar on the electricity request {electric}");
    match desk.assign(electric, TechnicianId(2)) {
        Err(err) => println!("Rejected as expected: {err}"),
        Ok(()) => println!("Unexpectedly accepted"),
    }

    println!("Completing request {plumbing}");
    desk.update_status(plumbing, RequestStatus::Done)?;

    let rows: Vec<RequestRow> = desk
        .requests()
        .list_all()
        .iter()
        .map(|request| RequestRow::from(*request))
        .collect();
    println!("\nCurrent requests");
    print!("{}", render_table(&rows));

    println!("Snapshot as JSON:");
    println!(
        "{}",
        serde_json::to_string_pretty(&rows).expect("rows serialize")
    );

    let sink = FileSink::new(&config.desk.export_path);
    let count = desk.export_pending(&sink)?;
    println!(
        "\nExported {count} 'NEW' requests to '{}'.",
        config.desk.export_path.display()
    );

    Ok(())
}

fn log(
    desk: &mut MaintenanceDesk,
    id: u16,
    location: Location,
    category: Category,
    rank: u8,
) -> Result<RequestId, AppError> {
    let id = RequestId(id);
    let priority = Priority::new(rank).expect("demo ranks are within 1..=5");
    let request = desk.create_request(id, location, category, priority)?;
    println!(
        "Logged request {} at {} ({}, priority {})",
        request.id(),
        request.location(),
        request.category(),
        request.priority().rank()
    );
    Ok(id)
}

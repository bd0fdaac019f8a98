//! Innkeep Menu CLI
//!
//! Interactive numbered menu over a single hotel's room registry.

use std::io::{self, BufRead, ErrorKind, Write};
use std::time::Instant;

use clap::Parser;
use innkeep::room::RoomState;
use innkeep::{
    BookingDate, BookingRequest, Command, Config, Hotel, HotelError, MenuChoice, Response, Room,
    RoomId, RoomUpdate,
};
use tracing_subscriber::{fmt, EnvFilter};

/// Innkeep
#[derive(Parser, Debug)]
#[command(name = "innkeep")]
#[command(about = "Hotel room registry with booking and CSV persistence")]
#[command(version)]
struct Args {
    /// CSV data file used by save, load and the exit autosave
    #[arg(short, long, default_value = "hotel_data.csv")]
    data_file: String,

    /// Load the data file before showing the menu
    #[arg(short, long)]
    load: bool,

    /// Do not save when exiting
    #[arg(long)]
    no_autosave: bool,

    /// Do not print per-command execution time
    #[arg(long)]
    no_timing: bool,
}

/// Log filter used when `RUST_LOG` is unset
const DEFAULT_LOG_FILTER: &str = "warn,innkeep=info";

/// Whether the menu loop keeps going
enum Flow {
    Continue,
    Exit,
}

fn main() {
    // Logs go to stderr so the menu on stdout stays readable
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    tracing::info!("Innkeep v{}", innkeep::VERSION);
    tracing::info!("Data file: {}", args.data_file);

    let config = Config::builder()
        .data_file(&args.data_file)
        .load_on_start(args.load)
        .autosave_on_exit(!args.no_autosave)
        .report_timing(!args.no_timing)
        .build();

    let mut hotel = match Hotel::open(config) {
        Ok(hotel) => hotel,
        Err(e) => {
            tracing::error!("Failed to open hotel: {}", e);
            std::process::exit(1);
        }
    };

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock());

    loop {
        print_menu();

        let line = match console.prompt("Enter Your Choice: ") {
            Ok(line) => line,
            // Input closed: leave the same way the Exit entry does
            Err(_) => {
                println!();
                exit(&mut hotel);
                break;
            }
        };

        let started = Instant::now();

        let Ok(number) = line.trim().parse::<u8>() else {
            println!("Invalid input. Please enter a number.");
            continue;
        };
        let Ok(choice) = MenuChoice::try_from(number) else {
            println!("Invalid choice");
            continue;
        };

        let flow = match run_choice(&mut hotel, &mut console, choice) {
            Ok(flow) => flow,
            Err(HotelError::Io(e)) if e.kind() == ErrorKind::UnexpectedEof => Flow::Continue,
            Err(e) => {
                println!("{}", e);
                Flow::Continue
            }
        };

        let elapsed_ms = started.elapsed().as_millis() as u64;
        tracing::info!(choice = choice.number(), elapsed_ms, "menu command finished");
        if hotel.config().report_timing {
            println!("Menu Execution Time: {} ms", elapsed_ms);
        }

        if let Flow::Exit = flow {
            break;
        }
    }
}

fn print_menu() {
    println!();
    println!("\tWelcome to Hotel Management System Application");
    println!();
    println!("\t____Hotel Management System____");
    println!();
    println!("{:<6}{:<28}{}", "S.No", "Functions", "Description");
    for choice in MenuChoice::ALL {
        println!("{:<6}{:<28}{}", choice.number(), choice.title(), choice.description());
    }
}

fn run_choice<R: BufRead>(
    hotel: &mut Hotel,
    console: &mut Console<R>,
    choice: MenuChoice,
) -> innkeep::Result<Flow> {
    match choice {
        MenuChoice::AllocateRoom => allocate(hotel, console)?,
        MenuChoice::SearchRoom => search(hotel, console)?,
        MenuChoice::UpdateBooking => update(hotel, console)?,
        MenuChoice::DeleteBooking => delete(hotel, console)?,
        MenuChoice::ShowRooms => {
            if let Response::Rooms(rooms) = hotel.execute(Command::ShowRooms)? {
                print_rooms(&rooms, "No records to show.");
            }
        }
        MenuChoice::BookRoom => book(hotel, console)?,
        MenuChoice::ShowAvailable => show_available(hotel),
        MenuChoice::Save => {
            if let Response::Saved { rooms } = hotel.execute(Command::Save)? {
                println!("Data saved to CSV file ({} rooms).", rooms);
            }
        }
        MenuChoice::Load => match hotel.execute(Command::Load)? {
            Response::Loaded { rooms } => println!("Data loaded from CSV ({} rooms).", rooms),
            _ => println!("No CSV data found."),
        },
        MenuChoice::Exit => {
            exit(hotel);
            return Ok(Flow::Exit);
        }
    }
    Ok(Flow::Continue)
}

// =============================================================================
// Menu Handlers
// =============================================================================

fn allocate<R: BufRead>(hotel: &mut Hotel, console: &mut Console<R>) -> innkeep::Result<()> {
    println!("\n\t____Hotel Management System____");

    let id = console.prompt_id_until_valid("Enter Room ID: ")?;
    if hotel.rooms().contains(id) {
        println!("Room ID already exists! Please use a different ID.");
        return Ok(());
    }

    let room_type = console.prompt("Enter Room type (Single/Double/Twin): ")?;
    hotel.execute(Command::Allocate { id, room_type })?;
    println!("\nNew Room Inserted!\n");
    Ok(())
}

fn search<R: BufRead>(hotel: &mut Hotel, console: &mut Console<R>) -> innkeep::Result<()> {
    println!("\n\t___Hotel Management System___");
    if hotel.rooms().is_empty() {
        println!("\nNo rooms exist.");
        return Ok(());
    }

    let id = console.prompt_id("\nEnter Room ID to search: ")?;
    if let Response::Room(room) = hotel.execute(Command::Search { id })? {
        print_room(&room);
    }
    Ok(())
}

fn update<R: BufRead>(hotel: &mut Hotel, console: &mut Console<R>) -> innkeep::Result<()> {
    println!("\n\t___Hotel Management System___");
    if hotel.rooms().is_empty() {
        println!("\nNo rooms exist.");
        return Ok(());
    }

    let id = console.prompt_id("\nEnter Room ID to update: ")?;
    let occupied = hotel.search(id)?.is_occupied();

    let new_id = console.prompt_id_until_valid("Enter new Room ID: ")?;
    if new_id != id && hotel.rooms().contains(new_id) {
        println!("New Room ID already exists! Update aborted.");
        return Ok(());
    }

    let room_type = console.prompt("Enter New Room Type: ")?;

    // Collected in full before anything is changed
    let booking = if occupied {
        let guest_name = console.prompt("Enter new Customer Name: ")?;
        let date = console.prompt("Enter new Booking Date (e.g., YYYY-MM-DD): ")?;
        Some(BookingRequest::new(guest_name, BookingDate::parse_date(&date)?))
    } else {
        None
    };

    hotel.execute(Command::Update {
        id,
        update: RoomUpdate {
            new_id,
            room_type,
            booking,
        },
    })?;
    println!("\nUpdate Record Successfully");
    Ok(())
}

fn delete<R: BufRead>(hotel: &mut Hotel, console: &mut Console<R>) -> innkeep::Result<()> {
    println!("\n\t___Hotel Management System___");
    if hotel.rooms().is_empty() {
        println!("\nNo rooms exist.");
        return Ok(());
    }

    let id = console.prompt_id("\nEnter Room ID to delete: ")?;
    hotel.execute(Command::Delete { id })?;
    println!("Delete Room Record Successful");
    Ok(())
}

fn book<R: BufRead>(hotel: &mut Hotel, console: &mut Console<R>) -> innkeep::Result<()> {
    println!("\n\t__Hotel Room Booking__");
    if hotel.rooms().is_empty() {
        println!("No Rooms Exist. Please add rooms first");
        return Ok(());
    }

    show_available(hotel);
    let id = console.prompt_id("\nEnter Room ID to Book: ")?;

    match hotel.rooms().state(id) {
        None => return Err(HotelError::NotFound(id)),
        Some(RoomState::Occupied) => return Err(HotelError::AlreadyBooked(id)),
        Some(RoomState::Vacant) => {}
    }

    let guest_name = console.prompt("Enter Customer Name: ")?;

    // A bad date ends the booking; it is not asked again
    let date = console.prompt("Enter Booking Date (e.g., YYYY-MM-DD): ")?;
    let date = BookingDate::parse_date(&date)?;

    hotel.execute(Command::Book {
        id,
        request: BookingRequest::new(guest_name, date),
    })?;
    println!("\nRoom {} booked successfully!", id);
    Ok(())
}

fn show_available(hotel: &Hotel) {
    println!("\n\t__Available Rooms__");
    if hotel.rooms().is_empty() {
        println!("No Rooms Exist in the System.");
        return;
    }

    let rooms = hotel.available_rooms();
    if rooms.is_empty() {
        println!("No Rooms are Currently Available.");
    }
    for room in &rooms {
        println!("\nRoom ID: {}", room.id);
        println!("Room Type: {}", room.room_type);
    }
}

fn exit(hotel: &mut Hotel) {
    println!("Exiting and saving data...");
    match hotel.execute(Command::Exit) {
        Ok(Response::Exited { saved: Some(rooms) }) => {
            println!("Data saved to CSV file ({} rooms).", rooms)
        }
        Ok(_) => {}
        Err(e) => {
            tracing::error!("Autosave failed: {}", e);
            println!("{}", e);
        }
    }
}

// =============================================================================
// Display
// =============================================================================

fn print_rooms(rooms: &[Room], empty_message: &str) {
    if rooms.is_empty() {
        println!("\n{}", empty_message);
    }
    for room in rooms {
        print_room(room);
    }
}

fn print_room(room: &Room) {
    println!("\nRoom ID: {}", room.id);
    println!(
        "Customer Name: {}",
        room.guest_name.as_deref().unwrap_or(innkeep::room::NOT_BOOKED_LABEL)
    );
    println!("Booking Date: {}", room.booking_date);
    println!("Room Type: {}", room.room_type);
    println!("Available: {}", if room.available { "Yes" } else { "No" });
}

// =============================================================================
// Input
// =============================================================================

/// Line-oriented prompts over any buffered reader
struct Console<R> {
    input: R,
}

impl<R: BufRead> Console<R> {
    fn new(input: R) -> Self {
        Self { input }
    }

    /// Print `text` and read one line. Closed input is `UnexpectedEof`.
    fn prompt(&mut self, text: &str) -> innkeep::Result<String> {
        print!("{}", text);
        io::stdout().flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(ErrorKind::UnexpectedEof, "input closed").into());
        }
        Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
    }

    /// Ask once for a room id.
    fn prompt_id(&mut self, text: &str) -> innkeep::Result<RoomId> {
        let line = self.prompt(text)?;
        parse_id(&line)
    }

    /// Ask for a room id until one parses.
    fn prompt_id_until_valid(&mut self, text: &str) -> innkeep::Result<RoomId> {
        let mut line = self.prompt(text)?;
        loop {
            match parse_id(&line) {
                Ok(id) => return Ok(id),
                Err(_) => line = self.prompt("Invalid input. Enter a valid Room ID: ")?,
            }
        }
    }
}

fn parse_id(text: &str) -> innkeep::Result<RoomId> {
    text.trim()
        .parse::<RoomId>()
        .map_err(|_| HotelError::InvalidInput(format!("invalid Room ID '{}'", text.trim())))
}

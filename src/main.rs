mod linked_list;
mod shell;
mod shell_command;

use clap::Parser;
use linked_list::LinkedList;

const DEMO_VALUES: [i32; 5] = [1, 2, 3, 4, 5];

/// Contains information parsed from the command-line invocation. Without `--script` or
/// `--interactive` the demo sequence runs with the configured values.
#[derive(Parser, Debug)]
#[command(about = "Fun with singly-linked lists")]
struct CmdOptions {
    /// "Values appended to the list before anything else (the demo defaults to 1 2 3 4 5)"
    #[arg(long, num_args = 1.., allow_negative_numbers = true)]
    values: Vec<i32>,
    /// "Value whose nodes the demo deletes"
    #[arg(long, allow_negative_numbers = true, default_value = "3")]
    delete_value: i32,
    /// "Location of the node the demo deletes"
    #[arg(long, default_value = "1")]
    delete_index: usize,
    /// "Value whose nodes the demo deletes together with the following node"
    #[arg(long, allow_negative_numbers = true, default_value = "2")]
    paired_value: i32,
    /// "Read commands from a prompt instead of running the demo"
    #[arg(short, long)]
    interactive: bool,
    /// "Run the commands in this file instead of running the demo"
    #[arg(short, long)]
    script: Option<String>,
    /// "File used to keep the prompt history"
    #[arg(long)]
    history: Option<String>,
}

fn run_demo(options: &CmdOptions, list: &mut LinkedList) {
    println!("Linked list: {}", list.display_forward());

    list.delete_by_value(options.delete_value);
    println!(
        "Linked list after deleting nodes with data = {}: {}",
        options.delete_value,
        list.display_forward()
    );

    list.delete_at(options.delete_index);
    println!(
        "Linked list after deleting node at location {}: {}",
        options.delete_index,
        list.display_forward()
    );

    list.delete_by_value_and_follower(options.paired_value);
    println!(
        "Linked list after deleting nodes with data = {} and next node's data: {}",
        options.paired_value,
        list.display_forward()
    );

    println!("{}", shell::format_memory(list));
    println!("Inverted linked list: {}", list.display_reverse());

    list.clear();
}

fn main() {
    // Library modules log removals at debug level; everything goes to stderr.
    if let Err(_) = std::env::var("RUST_LOG") {
        std::env::set_var("RUST_LOG", "info");
    }
    pretty_env_logger::init();

    let options = CmdOptions::parse();

    let run_demo_sequence = options.script.is_none() && !options.interactive;
    let values: &[i32] = if run_demo_sequence && options.values.is_empty() {
        &DEMO_VALUES
    } else {
        &options.values
    };
    let mut list = LinkedList::new();
    for value in values {
        list.add_node(*value);
    }
    log::debug!("Starting with {} node(s)", list.len());

    if let Some(path) = &options.script {
        if let Err(err) = shell::run_script(path, &mut list) {
            log::error!("Could not run script {}: {}", path, err);
            std::process::exit(1);
        }
    } else if options.interactive {
        let history_path = match &options.history {
            Some(path) => path.clone(),
            None => format!(
                "{}/.linked_list_history",
                std::env::var("HOME").unwrap_or_else(|_| ".".to_string())
            ),
        };
        let mut shell = shell::Shell::new(&history_path, list);
        shell.run();
    } else {
        run_demo(&options, &mut list);
    }
}

use tutorlink_core::assistant;

pub fn run_ask(message: &[String]) {
    println!("{}", assistant::reply(&message.join(" ")));
}

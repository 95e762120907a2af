use chrono::{Duration, Utc};
use timediff::{TimeDifference, TimeUnit};

fn main() {
    let now = Utc::now();
    let then = now - Duration::days(40) - Duration::hours(3) - Duration::minutes(12);
    let diff = TimeDifference::between(then, now);

    println!("seconds: {}", diff.in_seconds());
    println!("months:  {}", diff.in_months());
    println!("weeks:   {}", diff.in_weeks());
    println!("days:    {}", diff.in_days());

    for (unit, count) in diff.in_general() {
        if unit != TimeUnit::Seconds {
            println!("{unit:>8}: {count}");
        }
    }

    println!("{diff}");
}

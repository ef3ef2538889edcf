//! The reference walkthrough: one checking account, one individual and one
//! corporate investment account, two accepted operations, a transfer, and
//! two operations the bank must refuse.

use crate::bank_scenario;
use crate::scenario::Scenario;

pub const DEMO_BANK_NAME: &str = "Test Bank";

pub fn demonstration() -> Scenario {
    bank_scenario! {
        bank "Test Bank" {
            open checking "John Doe" with 1000;
            open individual "Jane Doe" with 2000;
            open corporate "OPENLANE Investments" with 5000;

            deposit 500 to "John Doe";
            expect "John Doe" balance 1500;

            withdraw 300 from "Jane Doe";
            expect "Jane Doe" balance 1700;

            transfer 200 from "John Doe" to "OPENLANE Investments";
            expect "John Doe" balance 1300;
            expect "OPENLANE Investments" balance 5200;

            // Over the individual cap
            withdraw 600 from "Jane Doe";
            expect "Jane Doe" balance 1700;

            // More than John Doe holds
            transfer 1800 from "John Doe" to "OPENLANE Investments";
            expect "John Doe" balance 1300;
            expect "OPENLANE Investments" balance 5200;
        }
    }
}

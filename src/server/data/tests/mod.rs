mod file;

use consent_hub_test_utils::{fixtures::consent::MockSubject, prelude::*};
use sea_orm::{EntityTrait, PaginatorTrait};

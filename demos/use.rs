use std::cmp::Ordering;

use avl_core::{AvlTreeMap, AvlTreeSet, CompositeKey, CompositeOrder};

struct Employee {
    id: u32,
    name: &'static str,
}

impl CompositeKey for Employee {
    fn compare_to(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id).then(self.name.cmp(other.name))
    }
}

fn main() {
    let mut map = AvlTreeMap::new();
    map.add(0, "zero");
    map.add(1, "one");
    map.add(2, "two");
    map.add(3, "three");
    map.add(4, "four");
    map.add(5, "five");
    assert_eq!(map.find(&1), Some(&"one"));
    map.remove(&1);
    assert!(map.find(&1).is_none());

    for (k, v) in &map {
        println!("{k} => {v}");
    }

    let mut set = AvlTreeSet::new();
    for x in 0..5 {
        set.insert(x);
    }
    assert!(set.contains(&1));
    set.remove(&1);
    assert!(!set.contains(&1));

    print!("{{ ");
    for x in set.reverse_in_order_traversal() {
        print!("{x}, ");
    }
    println!("}}");

    let mut staff = AvlTreeMap::with_comparator(CompositeOrder);
    staff.add(Employee { id: 2, name: "bob" }, "ops");
    staff.add(Employee { id: 1, name: "zoe" }, "dev");
    staff.add(Employee { id: 2, name: "alice" }, "dev");
    for (employee, team) in staff.in_order_traversal() {
        println!("{} {} ({team})", employee.id, employee.name);
    }
}

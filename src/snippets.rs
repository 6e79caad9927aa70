//! Hardcoded example snippets, one set per language.
//!
//! A convenience feature with no coupling to the analyzer: the snippets are
//! plain static text a caller can feed back into `analyze`.

use crate::analysis::Language;

/// One named example snippet.
pub struct Snippet {
    pub language: Language,
    pub name: &'static str,
    pub source: &'static str,
}

/// All bundled snippets.
pub static SNIPPETS: &[Snippet] = &[
    Snippet {
        language: Language::Python,
        name: "bubble_sort",
        source: r#"def bubble_sort(arr):
    n = len(arr)
    for i in range(n):
        for j in range(0, n-i-1):
            if arr[j] > arr[j+1]:
                arr[j], arr[j+1] = arr[j+1], arr[j]
    return arr
"#,
    },
    Snippet {
        language: Language::Python,
        name: "binary_search",
        source: r#"def binary_search(arr, target):
    low, high = 0, len(arr)-1
    while low <= high:
        mid = (low + high) // 2
        if arr[mid] == target:
            return mid
        elif arr[mid] < target:
            low = mid + 1
        else:
            high = mid - 1
    return -1
"#,
    },
    Snippet {
        language: Language::Python,
        name: "linked_list",
        source: r#"class Node:
    def __init__(self, data):
        self.data = data
        self.next = None

class LinkedList:
    def __init__(self):
        self.head = None

    def append(self, data):
        new_node = Node(data)
        if not self.head:
            self.head = new_node
            return
        last = self.head
        while last.next:
            last = last.next
        last.next = new_node
"#,
    },
    Snippet {
        language: Language::Java,
        name: "quick_sort",
        source: r#"public class QuickSort {
    public void quickSort(int[] arr, int low, int high) {
        if (low < high) {
            int pi = partition(arr, low, high);
            quickSort(arr, low, pi - 1);
            quickSort(arr, pi + 1, high);
        }
    }

    private int partition(int[] arr, int low, int high) {
        int pivot = arr[high];
        int i = (low - 1);
        for (int j = low; j < high; j++) {
            if (arr[j] < pivot) {
                i++;
                int temp = arr[i];
                arr[i] = arr[j];
                arr[j] = temp;
            }
        }
        int temp = arr[i + 1];
        arr[i + 1] = arr[high];
        arr[high] = temp;
        return i + 1;
    }
}
"#,
    },
    Snippet {
        language: Language::Java,
        name: "binary_tree",
        source: r#"class TreeNode {
    int val;
    TreeNode left;
    TreeNode right;
    TreeNode(int x) { val = x; }
}

class BinaryTree {
    TreeNode root;

    public void insert(int val) {
        root = insertRec(root, val);
    }

    private TreeNode insertRec(TreeNode root, int val) {
        if (root == null) {
            root = new TreeNode(val);
            return root;
        }
        if (val < root.val) {
            root.left = insertRec(root.left, val);
        } else if (val > root.val) {
            root.right = insertRec(root.right, val);
        }
        return root;
    }
}
"#,
    },
];

/// Snippets available for one language.
pub fn for_language(language: Language) -> impl Iterator<Item = &'static Snippet> {
    SNIPPETS.iter().filter(move |s| s.language == language)
}

/// Look up a snippet by language and name.
pub fn find(language: Language, name: &str) -> Option<&'static Snippet> {
    for_language(language).find(|s| s.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis;

    #[test]
    fn lookup_by_language_and_name() {
        assert!(find(Language::Python, "bubble_sort").is_some());
        assert!(find(Language::Java, "quick_sort").is_some());
        assert!(find(Language::Java, "bubble_sort").is_none());
        assert!(for_language(Language::Cpp).next().is_none());
    }

    #[test]
    fn every_snippet_analyzes_successfully() {
        for snippet in SNIPPETS {
            let result = analysis::analyze(snippet.source, snippet.language);
            assert!(
                result.is_success(),
                "snippet {} failed: {:?}",
                snippet.name,
                result.error_message()
            );
        }
    }
}
